pub mod account;
pub mod auth_response;
pub mod email;
pub mod geo;
pub mod password;
pub mod password_hash;
pub mod token;
pub mod verification_code;
