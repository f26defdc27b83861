//! Request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;

use krathub_session::UserProfile;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub login_id: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirm: &'a str,
}

/// Body of a failed request. Every field is optional; an empty or
/// unparseable body is treated as `ErrorBody::default()`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Successful login or signup body, kept exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSession(pub Value);

impl UserSession {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Credential token carried by the body, checking `token` then `accessToken`.
    pub fn token(&self) -> Option<&str> {
        ["token", "accessToken"]
            .into_iter()
            .filter_map(|key| self.0.get(key).and_then(Value::as_str))
            .find(|token| !token.is_empty())
    }

    /// Embedded user profile, if present and well formed.
    pub fn user(&self) -> Option<UserProfile> {
        let user = self.0.get("user")?;
        serde_json::from_value(user.clone()).ok()
    }
}
