use serde::{Deserialize, Serialize};

/// The uniform result envelope returned by every authentication operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: None,
        }
    }

    pub fn success_with_token(message: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: Some(token.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            token: None,
        }
    }
}
