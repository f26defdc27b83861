//! Session and profile inspection commands
use serde::Serialize;
use std::fmt;

use krathub_core::UserProfile;

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
    pub api_base_url: String,
}

impl SessionInfo {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let session = state.auth().snapshot();
        Self {
            authenticated: session.is_authenticated(),
            user: session.user,
            api_base_url: state.auth().client().base_url().to_string(),
        }
    }
}

impl fmt::Display for SessionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.authenticated, &self.user) {
            (true, Some(user)) => write!(f, "Logged in as {} ({})", user.name, user.role)?,
            (true, None) => write!(f, "Logged in (profile not loaded)")?,
            (false, _) => write!(f, "Not logged in")?,
        }
        write!(f, "\nService: {}", self.api_base_url)
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UserInfo(pub UserProfile);

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {}, role {})", self.0.name, self.0.id, self.0.role)
    }
}

/// Local view of the session; never touches the network.
pub fn status(state: &AppState) -> CommandResult<SessionInfo> {
    CommandResult::ok(SessionInfo::from_state(state))
}

/// Resolve the logged-in user, fetching the profile for a restored token.
pub async fn whoami(state: &AppState) -> CommandResult<UserInfo> {
    state.auth().current_user().await.map(UserInfo).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{Json, Router};
    use krathub_core::{AuthClient, AuthSession, KeyValueStore, MemoryStorage, SessionStore};
    use std::sync::Arc;

    async fn state_with_token(token: Option<&str>) -> AppState {
        let router = Router::new().route(
            "/v1/user/info",
            get(|| async { Json(serde_json::json!({"id": "1", "name": "Alice", "role": "admin"})) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let storage = MemoryStorage::new();
        if let Some(token) = token {
            storage.save("token", token).unwrap();
        }
        let store = SessionStore::new(Arc::new(storage));
        let client = AuthClient::new(&format!("http://{addr}")).unwrap();
        AppState::with_session(AuthSession::new(store, client))
    }

    #[tokio::test]
    async fn test_status_logged_out() {
        let state = state_with_token(None).await;
        let result = status(&state);

        let info = result.data.unwrap();
        assert!(!info.authenticated);
        assert!(info.to_string().starts_with("Not logged in"));
    }

    #[tokio::test]
    async fn test_whoami_fetches_profile() {
        let state = state_with_token(Some("abc123")).await;

        let before = status(&state).data.unwrap();
        assert!(before.to_string().starts_with("Logged in (profile not loaded)"));

        let result = whoami(&state).await;
        assert!(result.success);
        assert_eq!(
            result.render(false).unwrap(),
            "Alice (id 1, role admin)"
        );

        let after = status(&state).data.unwrap();
        assert!(after.to_string().starts_with("Logged in as Alice (admin)"));
    }

    #[tokio::test]
    async fn test_whoami_logged_out() {
        let state = state_with_token(None).await;
        let result = whoami(&state).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Not logged in"));
    }
}
