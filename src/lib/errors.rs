use thiserror::Error;

/// Errors surfaced by the HTTP helpers and feature clients.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Returns the HTTP status when the server answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
