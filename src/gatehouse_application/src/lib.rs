pub mod error;
pub mod geo_gate;
pub mod use_cases;
pub mod workflow;

#[cfg(test)]
mod test_support;

pub use error::{AuthError, Operation};
pub use geo_gate::GeoGate;
pub use use_cases::{LoginUseCase, RegisterUseCase, VerifyUseCase};
pub use workflow::AuthWorkflow;
