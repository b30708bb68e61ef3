//! Error types for geolocation operations.

use thiserror::Error;

/// Result type alias using GeolocError.
pub type GeolocResult<T> = Result<T, GeolocError>;

/// Primary error type for geolocation setup and coordinate mapping.
#[derive(Debug, Error)]
pub enum GeolocError {
    /// The space definition is malformed (image size, pixel size, projection code).
    #[error("invalid space definition: {0}")]
    Validation(String),

    /// The projection provider refused to build the forward or inverse transform.
    #[error("projection initialization failed: {0}")]
    ProviderInit(String),

    /// A single forward/inverse transform call failed.
    #[error("transform failed: {0}")]
    Transform(String),

    /// A fill-flagged coordinate was handed to a mapping call.
    #[error("{0} called with a fill coordinate")]
    Fill(&'static str),

    /// An angle failed its packed-DMS range check.
    #[error("angle out of range: {0}")]
    Range(String),
}

impl GeolocError {
    /// Create a Validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a ProviderInit error.
    pub fn provider_init(msg: impl Into<String>) -> Self {
        Self::ProviderInit(msg.into())
    }

    /// Create a Transform error.
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    /// Create a Range error.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Whether this is fill propagation rather than a genuine failure.
    pub fn is_fill(&self) -> bool {
        matches!(self, GeolocError::Fill(_))
    }
}

impl From<serde_json::Error> for GeolocError {
    fn from(err: serde_json::Error) -> Self {
        GeolocError::Validation(format!("metadata JSON error: {}", err))
    }
}

impl From<std::io::Error> for GeolocError {
    fn from(err: std::io::Error) -> Self {
        GeolocError::Validation(format!("metadata read error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_not_a_failure_kind() {
        assert!(GeolocError::Fill("to_space").is_fill());
        assert!(!GeolocError::transform("outside domain").is_fill());
    }

    #[test]
    fn test_messages() {
        let err = GeolocError::validation("Invalid number of lines: 0");
        assert_eq!(
            err.to_string(),
            "invalid space definition: Invalid number of lines: 0"
        );
        assert_eq!(
            GeolocError::Fill("from_space").to_string(),
            "from_space called with a fill coordinate"
        );
    }
}
