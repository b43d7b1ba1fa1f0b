//! Error types for the color service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Primary error type for color service operations.
#[derive(Error, Debug)]
pub enum ColorError {
    // Request errors
    #[error("Error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    // Web server errors
    #[error("Web server failed to start on {addr}: {reason}")]
    ServerFailed { addr: String, reason: String },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl ColorError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Decode(_)
                | Self::ConfigNotFound { .. }
                | Self::ConfigParse(_)
                | Self::ServerFailed { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Decode(_) => {
                Some("Send a JSON array such as [{\"color\":\"red\",\"delayLength\":0}]")
            }
            Self::ConfigNotFound { .. } => Some("Check --config or COLORSVC_CONFIG"),
            Self::ConfigParse(_) => Some("Run: colorsvc config to see the expected keys"),
            Self::ServerFailed { .. } => Some("Use --port to pick a free port"),
            _ => None,
        }
    }

    /// HTTP status used when this error terminates a request.
    pub const fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ColorError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Convenience type alias for Results using ColorError.
pub type Result<T> = std::result::Result<T, ColorError>;
