//! Custom error types for the gateway integration generator.
//!
//! The integration builder itself never fails; these errors come from the
//! surfaces around it: configuration loading, optional strict validation
//! and serialization of generated documents.

use std::fmt;

/// Custom error type for the application.
#[derive(Debug)]
pub enum AppError {
    /// Missing or unusable generator configuration
    ConfigError(String),
    /// Request rejected by strict validation
    ValidationError(String),
    /// Generated output could not be serialized
    SerializationError(String),
    /// Generic error for other cases
    GenericError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::GenericError(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::GenericError(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError(error.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            AppError::ConfigError("GATEWAY_KEY is not set".to_string()).to_string(),
            "Configuration error: GATEWAY_KEY is not set"
        );
        assert_eq!(
            AppError::ValidationError("`id` must not be empty".to_string()).to_string(),
            "Validation error: `id` must not be empty"
        );
        assert_eq!(AppError::GenericError("boom".to_string()).to_string(), "boom");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::SerializationError(_)));
    }
}
