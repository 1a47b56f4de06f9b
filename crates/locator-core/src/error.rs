//! Error types for locator operations.

use thiserror::Error;

/// Reasons a position request can fail.
///
/// None of these are fatal: the resolver keeps the fallback position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoFailure {
    /// The user (or OS) refused access to location.
    #[error("location permission denied")]
    PermissionDenied,

    /// The location service did not answer in time.
    #[error("location request timed out")]
    Timeout,

    /// No location service is available on this host.
    #[error("location service unsupported")]
    Unsupported,

    /// The service answered but could not determine a position.
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
}

/// Reasons a facility query can fail.
///
/// On any of these the previously published facilities stay in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryFailure {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("bad status {status}: {body}")]
    BadStatus { status: u16, body: String },

    /// The response could not be interpreted as a result set.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl QueryFailure {
    /// Whether a single bounded retry is worthwhile for this failure.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::BadStatus { status, .. } => *status == 429 || *status >= 500,
            Self::MalformedPayload(_) => false,
        }
    }
}

/// Invalid coordinate components.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate component is not a finite number")]
    NonFinite,

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Configuration errors raised while building locator components.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting was present but unusable.
    #[error("invalid setting '{key}': {reason}")]
    Invalid { key: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::Invalid`].
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
