use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("API token has expired. Please enter a new token")]
    TokenExpired,

    #[error("Failed to fetch {context}: {status}")]
    Transport { context: String, status: String },

    #[error("Unexpected upstream payload for {context}: {reason}")]
    UnexpectedPayload { context: String, reason: String },
}

impl Error {
    pub fn transport(context: impl Into<String>, status: impl Into<String>) -> Self {
        Error::Transport {
            context: context.into(),
            status: status.into(),
        }
    }

    pub fn unexpected_payload(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::UnexpectedPayload {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable tag so callers can branch on the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Validation(_) => "validation",
            Error::TokenExpired => "token_expired",
            Error::Transport { .. } => "transport",
            Error::UnexpectedPayload { .. } => "unexpected_payload",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let kind = self.kind();
        let (status, error_message) = match self {
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::TokenExpired => (StatusCode::UNAUTHORIZED, Error::TokenExpired.to_string()),
            err @ (Error::Transport { .. } | Error::UnexpectedPayload { .. }) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            Error::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message, "kind": kind }));
        (status, body).into_response()
    }
}
