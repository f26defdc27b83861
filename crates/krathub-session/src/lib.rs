//! Krathub Session Management
//!
//! Single source of truth for "who is logged in":
//! - The credential token is written through to durable storage on every change
//! - The user profile is transient and never persisted
//! - A restored token starts without a user; consumers re-fetch it

mod session;
mod store;

pub use session::{Session, UserProfile, UserRole};
pub use store::{SessionStore, TOKEN_KEY};
