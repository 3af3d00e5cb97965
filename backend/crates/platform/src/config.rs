//! Environment Configuration Helpers
//!
//! Thin helpers over `std::env` used by the binary to assemble typed config.
//! `.env` loading itself happens in the binary via `dotenvy`.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Required variable is not set
    #[error("{0} must be set in environment")]
    Missing(String),

    /// Variable is set but cannot be parsed
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Read a non-empty variable, treating blank values as unset.
pub fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a variable that must be present.
pub fn required(key: &str) -> Result<String, ConfigError> {
    optional(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Read a variable or fall back to `default`.
pub fn or_default(key: &str, default: &str) -> String {
    optional(key).unwrap_or_else(|| {
        tracing::debug!("{key} not set, using default: {default}");
        default.to_string()
    })
}

/// Read and parse a variable, falling back to `default` when unset.
pub fn parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
            value: raw,
        }),
    }
}

/// Parse a human duration such as `7d`, `12h`, `30m`, `45s` or bare seconds.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);
    let amount: u64 = digits.parse().ok()?;

    let seconds = match unit.trim() {
        "" | "s" => amount,
        "m" => amount.checked_mul(60)?,
        "h" => amount.checked_mul(3600)?,
        "d" => amount.checked_mul(24 * 3600)?,
        _ => return None,
    };

    Some(Duration::from_secs(seconds))
}

/// Read a duration variable, falling back to `default` when unset.
pub fn duration_or(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    match optional(key) {
        None => Ok(default),
        Some(raw) => parse_duration(&raw).ok_or(ConfigError::Invalid {
            key: key.to_string(),
            value: raw,
            reason: "expected <n>d, <n>h, <n>m, <n>s or seconds".to_string(),
        }),
    }
}

/// Runtime mode; development echoes internal error detail to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    /// Parse a mode name; anything other than `development`/`dev` is production.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => RuntimeMode::Development,
            _ => RuntimeMode::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeMode::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Production => "production",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("7d"), Some(Duration::from_secs(7 * 24 * 3600)));
        assert_eq!(parse_duration("12h"), Some(Duration::from_secs(12 * 3600)));
        assert_eq!(parse_duration("30m"), Some(Duration::from_secs(1800)));
        assert_eq!(parse_duration("45s"), Some(Duration::from_secs(45)));
        assert_eq!(parse_duration("3600"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration(" 2d "), Some(Duration::from_secs(2 * 24 * 3600)));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("d"), None);
        assert_eq!(parse_duration("7w"), None);
        assert_eq!(parse_duration("-5s"), None);
    }

    #[test]
    fn test_runtime_mode() {
        assert_eq!(RuntimeMode::from_name("development"), RuntimeMode::Development);
        assert_eq!(RuntimeMode::from_name("DEV"), RuntimeMode::Development);
        assert_eq!(RuntimeMode::from_name("production"), RuntimeMode::Production);
        assert_eq!(RuntimeMode::from_name("staging"), RuntimeMode::Production);
        assert!(RuntimeMode::Development.is_development());
    }

    #[test]
    fn test_missing_required_variable() {
        let err = required("QUESTION_CATALOG_SURELY_UNSET_VARIABLE").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing("QUESTION_CATALOG_SURELY_UNSET_VARIABLE".to_string())
        );
    }
}
