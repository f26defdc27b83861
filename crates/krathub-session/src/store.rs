//! Session Store
//!
//! Holds the token and user profile. Token changes write through to durable
//! storage immediately; storage failures are logged and never surface to the
//! caller, since the in-memory state stays usable.

use parking_lot::RwLock;
use std::sync::Arc;

use krathub_storage::KeyValueStore;

use crate::session::{Session, UserProfile};

/// Storage key holding the raw token string.
pub const TOKEN_KEY: &str = "token";

pub struct SessionStore {
    /// Current credential token, empty when logged out
    token: Arc<RwLock<String>>,
    /// Resolved user profile, never persisted
    user: Arc<RwLock<Option<UserProfile>>>,
    /// Durable storage for the token
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Create a store and restore the token from `storage`.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let token = match storage.load(TOKEN_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore token from storage");
                String::new()
            }
        };

        tracing::debug!(restored = !token.is_empty(), "Initialized session store");

        Self {
            token: Arc::new(RwLock::new(token)),
            user: Arc::new(RwLock::new(None)),
            storage,
        }
    }

    /// Replace the token and persist it. Any string is accepted; `""` is the
    /// "no token" sentinel but, unlike [`logout`](Self::logout), keeps the user.
    pub fn set_token(&self, new_token: impl Into<String>) {
        let new_token = new_token.into();

        // Hold the guard across the save so memory and storage change together
        let mut token = self.token.write();
        if let Err(e) = self.storage.save(TOKEN_KEY, &new_token) {
            tracing::warn!(error = %e, "Failed to persist token");
        }

        tracing::debug!(token_len = new_token.len(), "Token updated");
        *token = new_token;
    }

    pub fn set_user(&self, profile: UserProfile) {
        tracing::debug!(user_id = %profile.id, role = %profile.role, "User updated");
        *self.user.write() = Some(profile);
    }

    /// Clear token and user, and drop the persisted token.
    pub fn logout(&self) {
        {
            let mut token = self.token.write();
            if let Err(e) = self.storage.remove(TOKEN_KEY) {
                tracing::warn!(error = %e, "Failed to remove persisted token");
            }
            token.clear();
        }
        *self.user.write() = None;

        tracing::info!("Logged out");
    }

    /// True iff a non-empty token is present. Says nothing about whether the
    /// service still accepts it.
    pub fn is_authenticated(&self) -> bool {
        !self.token.read().is_empty()
    }

    pub fn token(&self) -> String {
        self.token.read().clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.user.read().clone()
    }

    /// A token is present but the profile has not been resolved yet, e.g.
    /// right after a restart.
    pub fn needs_user_refresh(&self) -> bool {
        self.is_authenticated() && self.user.read().is_none()
    }

    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token(),
            user: self.user(),
        }
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            token: Arc::clone(&self.token),
            user: Arc::clone(&self.user),
            storage: Arc::clone(&self.storage),
        }
    }
}
