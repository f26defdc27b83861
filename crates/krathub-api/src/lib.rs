//! Krathub Auth API Client
//!
//! Thin wrapper over the user service's HTTP API:
//! - login and signup return the service's JSON body unmodified
//! - the current user is fetched with a bearer token
//! - every non-2xx answer becomes one [`ApiError::Auth`] with a readable message
//!
//! Requests are fire-once. No retry, timeout, or cancellation happens here;
//! wrap the client if you need them.

mod client;
mod error;
mod types;

pub use client::{fallback_message, AuthClient, Operation, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{ErrorBody, LoginRequest, SignupRequest, UserSession};

// The profile type is shared with the session store
pub use krathub_session::UserProfile;

pub type Result<T> = std::result::Result<T, ApiError>;
