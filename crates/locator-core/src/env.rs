//! Environment variable helpers for `from_env` constructors.
//!
//! Unset variables mean "use the default". A variable that is set but does
//! not parse is a configuration error rather than a silent fallback.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Read and parse an optional environment variable.
pub fn parse_var<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string())),
        Err(_) => Ok(None),
    }
}

/// Read an optional boolean flag (`true`/`1`/`yes` or `false`/`0`/`no`).
pub fn flag_var(key: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            other => Err(ConfigError::invalid(
                key,
                format!("expected a boolean, got '{}'", other),
            )),
        },
        Err(_) => Ok(None),
    }
}

/// Read an optional string variable, treating blank values as unset.
pub fn string_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
