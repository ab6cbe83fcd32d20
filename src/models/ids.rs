//! Strongly-typed identifiers
//!
//! Transaction ids are UUID newtypes. User ids are validated strings, since
//! they double as directory names in the per-user storage layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate UUID-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");

/// Error returned when a user id is not usable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
    LeadingDot,
}

impl fmt::Display for UserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User id cannot be empty"),
            Self::TooLong(len) => write!(f, "User id too long ({} chars, max 64)", len),
            Self::InvalidCharacter(c) => write!(f, "User id contains invalid character '{}'", c),
            Self::LeadingDot => write!(f, "User id cannot start with '.'"),
        }
    }
}

impl std::error::Error for UserIdError {}

/// Identity of the user who owns a set of transactions and budgets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Parse and validate a user id
    pub fn parse(s: &str) -> Result<Self, UserIdError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(UserIdError::Empty);
        }
        if s.len() > 64 {
            return Err(UserIdError::TooLong(s.len()));
        }
        if s.starts_with('.') {
            return Err(UserIdError::LeadingDot);
        }
        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(UserIdError::InvalidCharacter(c));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_display_prefix() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_transaction_id_parse() {
        let id = TransactionId::new();
        let full = id.as_uuid().to_string();
        let parsed: TransactionId = full.parse().unwrap();
        assert_eq!(id, parsed);

        let prefixed: TransactionId = format!("txn-{}", full).parse().unwrap();
        assert_eq!(id, prefixed);
    }

    #[test]
    fn test_user_id_valid() {
        assert_eq!(UserId::parse("alice").unwrap().as_str(), "alice");
        assert_eq!(UserId::parse("  bob_2 ").unwrap().as_str(), "bob_2");
        assert!(UserId::parse("uid.with-dots").is_ok());
    }

    #[test]
    fn test_user_id_rejects_path_tricks() {
        assert_eq!(UserId::parse(""), Err(UserIdError::Empty));
        assert_eq!(UserId::parse(".."), Err(UserIdError::LeadingDot));
        assert_eq!(UserId::parse("a/b"), Err(UserIdError::InvalidCharacter('/')));
        assert!(matches!(
            UserId::parse(&"x".repeat(65)),
            Err(UserIdError::TooLong(65))
        ));
    }

    #[test]
    fn test_user_id_serde() {
        let id = UserId::parse("alice").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"alice\"");
        assert!(serde_json::from_str::<UserId>("\"../etc\"").is_err());
    }
}
