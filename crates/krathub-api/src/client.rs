//! HTTP client for the authentication and user endpoints

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use krathub_session::UserProfile;

use crate::error::ApiError;
use crate::types::{ErrorBody, LoginRequest, SignupRequest, UserSession};
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

const LOGIN_PATH: &str = "v1/auth/login/using-email-password";
const SIGNUP_PATH: &str = "v1/auth/signup/using-email";
const USER_INFO_PATH: &str = "v1/user/info";

/// The three requests this client knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Signup,
    GetCurrentUser,
}

impl Operation {
    /// Label used in fallback error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Signup => "signup",
            Operation::GetCurrentUser => "get current user",
        }
    }
}

/// Message used when a failed response does not explain itself.
pub fn fallback_message(operation: &str, status: u16) -> String {
    format!("{operation} failed ({status})")
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    /// Always ends with `/` so endpoint paths join under it
    base_url: Url,
}

impl AuthClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client`, e.g. one with a timeout.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))
    }

    /// `POST /v1/auth/login/using-email-password`
    pub async fn login(&self, login_id: &str, password: &str) -> Result<UserSession> {
        let url = self.endpoint(LOGIN_PATH)?;
        let request = self.http.post(url).json(&LoginRequest { login_id, password });

        self.execute(Operation::Login, request).await
    }

    /// `POST /v1/auth/signup/using-email`
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<UserSession> {
        let url = self.endpoint(SIGNUP_PATH)?;
        let request = self.http.post(url).json(&SignupRequest {
            name,
            email,
            password,
            password_confirm,
        });

        self.execute(Operation::Signup, request).await
    }

    /// `GET /v1/user/info` with `Authorization: Bearer <token>`
    pub async fn get_current_user(&self, token: &str) -> Result<UserProfile> {
        let url = self.endpoint(USER_INFO_PATH)?;
        let request = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"));

        self.execute(Operation::GetCurrentUser, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T> {
        tracing::debug!(operation = operation.label(), "Sending request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(operation = operation.label(), error = %e, "Request failed");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            // The status alone is enough to report; an unreadable body just
            // means the fallback message.
            let body = response.bytes().await.unwrap_or_default();
            return Err(failure(operation, status, &body));
        }

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;

        tracing::debug!(
            operation = operation.label(),
            status = status.as_u16(),
            "Request succeeded"
        );

        Ok(parsed)
    }
}

fn failure(operation: Operation, status: StatusCode, body: &[u8]) -> ApiError {
    let status = status.as_u16();
    let message = ErrorBody::from_slice(body)
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback_message(operation.label(), status));

    tracing::warn!(
        operation = operation.label(),
        status,
        message = %message,
        "Service rejected request"
    );

    ApiError::Auth { message, status }
}
