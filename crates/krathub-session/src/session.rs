//! Session data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Profile of the logged-in user as returned by `/v1/user/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    /// Parsed form of `role`.
    pub fn role_kind(&self) -> UserRole {
        // FromStr is infallible here
        self.role.parse().unwrap_or(UserRole::Unknown)
    }

    pub fn has_role_at_least(&self, min: UserRole) -> bool {
        self.role_kind() >= min
    }
}

/// Role vocabulary of the user service, lowest privilege first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserRole {
    Unknown,
    Guest,
    User,
    Admin,
    Operator,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Unknown => "unknown",
            UserRole::Guest => "guest",
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::Operator => "operator",
        }
    }
}

impl FromStr for UserRole {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "guest" => UserRole::Guest,
            "user" => UserRole::User,
            "admin" => UserRole::Admin,
            "operator" => UserRole::Operator,
            _ => UserRole::Unknown,
        })
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time copy of a session store's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Credential token, empty when logged out
    pub token: String,
    /// Resolved profile, `None` until fetched or set
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("guest".parse::<UserRole>().unwrap(), UserRole::Guest);
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("operator".parse::<UserRole>().unwrap(), UserRole::Operator);
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Unknown);
        assert_eq!("".parse::<UserRole>().unwrap(), UserRole::Unknown);
    }

    #[test]
    fn test_role_ordering() {
        assert!(UserRole::Unknown < UserRole::Guest);
        assert!(UserRole::Guest < UserRole::User);
        assert!(UserRole::User < UserRole::Admin);
        assert!(UserRole::Admin < UserRole::Operator);

        let admin = UserProfile::new("1", "Alice", "admin");
        assert!(admin.has_role_at_least(UserRole::User));
        assert!(admin.has_role_at_least(UserRole::Admin));
        assert!(!admin.has_role_at_least(UserRole::Operator));

        let odd = UserProfile::new("2", "Bob", "superuser");
        assert_eq!(odd.role_kind(), UserRole::Unknown);
        assert!(!odd.has_role_at_least(UserRole::Guest));
    }

    #[test]
    fn test_profile_deserialize() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"1","name":"Alice","role":"admin"}"#).unwrap();
        assert_eq!(profile, UserProfile::new("1", "Alice", "admin"));
    }
}
