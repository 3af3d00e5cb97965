//! Email Value Object
//!
//! Represents a validated administrator email address.
//! Stored exactly as entered (after trimming); lookups are case-sensitive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email validation errors (messages are shown per field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Empty,

    #[error("Please provide a valid email address")]
    InvalidFormat,

    #[error("Email must be at most 254 characters")]
    TooLong,
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into().trim().to_string();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong);
        }

        // Basic email format validation
        if !Self::is_valid_format(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        // Must contain exactly one @
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        // Local part checks
        if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
            return false;
        }

        // Domain checks
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        // Check domain has valid characters
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Domain shouldn't start or end with dot or hyphen
        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }

        !domain.contains("..")
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, EmailError> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.com").is_ok());
        assert!(Email::new("user+tag@example.co.jp").is_ok());
        assert!(Email::new("user@sub.domain.com").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(Email::new("").unwrap_err(), EmailError::Empty);
        assert_eq!(Email::new("   ").unwrap_err(), EmailError::Empty);
        assert_eq!(Email::new("invalid").unwrap_err(), EmailError::InvalidFormat);
        assert_eq!(Email::new("@example.com").unwrap_err(), EmailError::InvalidFormat);
        assert_eq!(Email::new("user@").unwrap_err(), EmailError::InvalidFormat);
        assert_eq!(Email::new("user@example").unwrap_err(), EmailError::InvalidFormat);
        assert_eq!(Email::new("user@@example.com").unwrap_err(), EmailError::InvalidFormat);
        assert_eq!(Email::new("user@.example.com").unwrap_err(), EmailError::InvalidFormat);
    }

    #[test]
    fn test_email_trimmed_not_lowercased() {
        let email = Email::new("  Admin@Example.com ").unwrap();
        assert_eq!(email.as_str(), "Admin@Example.com");
        assert_ne!(email, Email::new("admin@example.com").unwrap());
    }

    #[test]
    fn test_too_long() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::new(long).unwrap_err(), EmailError::TooLong);
    }
}
