//! Authenticated session coordination
//!
//! The store and the API client never call each other; this is the
//! application-side glue that does.

use std::sync::Arc;

use krathub_api::{AuthClient, UserSession};
use krathub_session::{Session, SessionStore, UserProfile};
use krathub_storage::Database;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct AuthSession {
    store: SessionStore,
    client: AuthClient,
}

impl AuthSession {
    pub fn new(store: SessionStore, client: AuthClient) -> Self {
        Self { store, client }
    }

    /// Open local storage and build a client from `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let db = Database::open(&config.storage_path)?;
        let store = SessionStore::new(Arc::new(db));
        let client = AuthClient::new(&config.api_base_url)?;

        tracing::info!(
            api_base_url = %client.base_url(),
            restored = store.is_authenticated(),
            "Opened auth session"
        );

        Ok(Self::new(store, client))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    pub fn snapshot(&self) -> Session {
        self.store.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Log in and remember the returned token (and user, if embedded).
    pub async fn login(&self, login_id: &str, password: &str) -> Result<UserSession> {
        let session = self.client.login(login_id, password).await?;
        let token = session.token().ok_or(CoreError::MissingToken)?;

        self.store.set_token(token);
        if let Some(user) = session.user() {
            self.store.set_user(user);
        }

        tracing::info!(login_id = %login_id, "Logged in");

        Ok(session)
    }

    /// Sign up. Services that log the new account in straight away return a
    /// token, which is stored like a login; otherwise the store is untouched.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<UserSession> {
        let session = self
            .client
            .signup(name, email, password, password_confirm)
            .await?;

        if let Some(token) = session.token() {
            self.store.set_token(token);
            if let Some(user) = session.user() {
                self.store.set_user(user);
            }
        }

        tracing::info!(email = %email, "Signed up");

        Ok(session)
    }

    /// The logged-in user, fetched once and cached in the store.
    ///
    /// A `401` means the stored token is no longer accepted, so the session
    /// is cleared before the error is returned.
    pub async fn current_user(&self) -> Result<UserProfile> {
        if !self.store.is_authenticated() {
            return Err(CoreError::NotAuthenticated);
        }
        if let Some(user) = self.store.user() {
            return Ok(user);
        }

        self.refresh_user().await
    }

    /// Fetch the profile even if one is cached.
    pub async fn refresh_user(&self) -> Result<UserProfile> {
        let token = self.store.token();
        if token.is_empty() {
            return Err(CoreError::NotAuthenticated);
        }

        match self.client.get_current_user(&token).await {
            Ok(user) => {
                self.store.set_user(user.clone());
                Ok(user)
            }
            Err(e) if e.is_unauthorized() => {
                tracing::warn!("Stored token rejected, clearing session");
                self.store.logout();
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn logout(&self) {
        self.store.logout();
    }
}

impl Clone for AuthSession {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            client: self.client.clone(),
        }
    }
}
