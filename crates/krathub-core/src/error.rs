//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] krathub_storage::StorageError),

    #[error(transparent)]
    Api(#[from] krathub_api::ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Login response did not contain a token")]
    MissingToken,
}
