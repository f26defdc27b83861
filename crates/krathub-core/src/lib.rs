//! Krathub Core
//!
//! Wires the session store, local storage and API client together the way
//! application code uses them.

mod auth;
mod config;
mod error;

pub use auth::AuthSession;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use krathub_api::{fallback_message, ApiError, AuthClient, UserSession};
pub use krathub_session::{Session, SessionStore, UserProfile, UserRole};
pub use krathub_storage::{Database, KeyValueStore, MemoryStorage, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
