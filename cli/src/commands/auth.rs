//! Login, signup and logout commands
use serde::Serialize;
use std::fmt;

use super::user::SessionInfo;
use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SignupInfo {
    pub email: String,
    /// Whether the service logged the new account in directly
    pub authenticated: bool,
}

impl fmt::Display for SignupInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signed up as {}", self.email)?;
        if !self.authenticated {
            write!(f, "; run `krathub login` to start a session")?;
        }
        Ok(())
    }
}

pub async fn login(state: &AppState, login_id: &str, password: &str) -> CommandResult<SessionInfo> {
    match state.auth().login(login_id, password).await {
        Ok(_) => CommandResult::ok(SessionInfo::from_state(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub async fn signup(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> CommandResult<SignupInfo> {
    state
        .auth()
        .signup(name, email, password, password_confirm)
        .await
        .map(|session| SignupInfo {
            email: email.to_string(),
            authenticated: session.token().is_some(),
        })
        .into()
}

pub fn logout(state: &AppState) -> CommandResult<SessionInfo> {
    state.auth().logout();
    CommandResult::ok(SessionInfo::from_state(state))
}
