pub mod login;
pub mod register;
pub mod verify;

pub use login::LoginUseCase;
pub use register::{
    REGISTRATION_SUCCESS_MESSAGE, RegisterUseCase, VERIFICATION_EMAIL_SUBJECT,
    verification_email_body,
};
pub use verify::VerifyUseCase;
