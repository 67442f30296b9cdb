//! Environment Configuration Helpers
//!
//! Thin typed accessors over process environment variables. Binaries load
//! `.env` first (via `dotenvy`) and then read settings through these.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Error when reading configuration from the environment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Read a required variable; empty values count as missing
pub fn required(key: &str) -> Result<String, ConfigError> {
    optional(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Read an optional variable; empty values count as unset
pub fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u32>("MAX_CONNECTIONS", " 8 "), Ok(8));

        let err = parse_value::<u32>("MAX_CONNECTIONS", "eight").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "MAX_CONNECTIONS"));
    }

    #[test]
    fn test_missing_required() {
        let err = required("WALLET_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing("WALLET_TEST_SURELY_UNSET_VARIABLE".to_string())
        );
    }

    #[test]
    fn test_parse_or_default() {
        let value = parse_or("WALLET_TEST_SURELY_UNSET_VARIABLE", 42u16).unwrap();
        assert_eq!(value, 42);
    }
}
