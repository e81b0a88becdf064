pub mod client_ip;
pub mod middleware;
pub mod routes;

pub use client_ip::ClientIp;
pub use middleware::require_bearer;
