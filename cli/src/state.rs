//! Application state management
use krathub_core::{AuthSession, Config, Result};

/// State shared by all commands of one invocation
pub struct AppState {
    auth: AuthSession,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let auth = AuthSession::open(config)?;
        Ok(Self::with_session(auth))
    }

    pub fn with_session(auth: AuthSession) -> Self {
        Self { auth }
    }

    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }
}
