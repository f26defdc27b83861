//! CLI commands
//!
//! Each command returns a [`CommandResult`] so output can be printed either
//! for a human or as JSON for scripts.

pub mod auth;
pub mod user;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<krathub_core::Result<T>> for CommandResult<T> {
    fn from(result: krathub_core::Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

impl<T: Serialize + fmt::Display> CommandResult<T> {
    /// Text to print: pretty JSON, or the data's `Display` form on success
    /// and the error message otherwise.
    pub fn render(&self, json: bool) -> serde_json::Result<String> {
        if json {
            return serde_json::to_string_pretty(self);
        }

        Ok(match (&self.data, &self.error) {
            (Some(data), _) => data.to_string(),
            (None, Some(error)) => format!("error: {error}"),
            (None, None) => String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krathub_core::CoreError;

    #[test]
    fn test_render_json() {
        let result = CommandResult::ok("hello".to_string());
        let rendered = result.render(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": true, "data": "hello", "error": null})
        );
    }

    #[test]
    fn test_render_text() {
        let result: CommandResult<String> = Err(CoreError::NotAuthenticated).into();
        assert!(!result.success);
        assert_eq!(result.render(false).unwrap(), "error: Not logged in");

        let result = CommandResult::ok("done".to_string());
        assert_eq!(result.render(false).unwrap(), "done");
    }
}
