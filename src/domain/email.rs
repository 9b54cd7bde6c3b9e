//! src/domain/email.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Permissive syntactic check: local-part, `@`, domain with at least one dot,
// no whitespace anywhere. Deliberately not full RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Empty email")]
    Empty,
    #[error("{0}")]
    Invalid(String),
}

/// A validated waitlist email, trimmed and lowercased.
///
/// Lowercasing happens here so the store's uniqueness constraint
/// deduplicates case-insensitively.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::Empty);
        }

        if EMAIL_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_lowercase()))
        } else {
            Err(Error::Invalid(format!("Invalid email: {}", trimmed)))
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
