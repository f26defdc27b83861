//! API error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Auth { message: String, status: u16 },

    /// The HTTP exchange did not complete.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Message suitable for showing to a user.
    pub fn message(&self) -> String {
        match self {
            ApiError::Auth { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status reported by the service, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
