//! Generator configuration.
//!
//! The gateway key and the Lambda name prefix are fixed for a whole
//! generation run. They are loaded once and passed to the generators
//! explicitly.

use crate::models::AppError;

/// Name of the `aws_api_gateway_rest_api` resource the integrations belong to
pub const GATEWAY_KEY_ENV: &str = "GATEWAY_KEY";
/// Prefix shared by all generated `aws_lambda_function` resources
pub const LAMBDA_PREFIX_ENV: &str = "LAMBDA_PREFIX";
/// Opt-in strict validation of generator requests
pub const STRICT_VALIDATION_ENV: &str = "STRICT_VALIDATION";

/// Read-only settings shared by every generator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    gateway_key: String,
    lambda_prefix: String,
    strict: bool,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(gateway_key: impl Into<String>, lambda_prefix: impl Into<String>) -> Self {
        Self {
            gateway_key: gateway_key.into(),
            lambda_prefix: lambda_prefix.into(),
            strict: false,
        }
    }

    /// Enables or disables strict request validation
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn gateway_key(&self) -> &str {
        &self.gateway_key
    }

    #[must_use]
    pub fn lambda_prefix(&self) -> &str {
        &self.lambda_prefix
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Loads the configuration from the process environment.
    ///
    /// Required:
    /// - `GATEWAY_KEY`
    /// - `LAMBDA_PREFIX`
    ///
    /// Optional:
    /// - `STRICT_VALIDATION` (`1`, `true` or `yes`, case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if a required variable is missing or blank.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if a required variable is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::ConfigError(format!("{name} is not set")))
        };

        let gateway_key = required(GATEWAY_KEY_ENV)?;
        let lambda_prefix = required(LAMBDA_PREFIX_ENV)?;
        let strict = matches!(
            lookup(STRICT_VALIDATION_ENV)
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
                .as_str(),
            "1" | "true" | "yes"
        );

        Ok(Self {
            gateway_key,
            lambda_prefix,
            strict,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_required_values() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("GATEWAY_KEY", "api"),
            ("LAMBDA_PREFIX", "svc"),
        ]))
        .unwrap();

        assert_eq!(config.gateway_key(), "api");
        assert_eq!(config.lambda_prefix(), "svc");
        assert!(!config.is_strict());
    }

    #[test]
    fn test_from_lookup_trims_values() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("GATEWAY_KEY", " api "),
            ("LAMBDA_PREFIX", "svc\n"),
        ]))
        .unwrap();

        assert_eq!(config, GeneratorConfig::new("api", "svc"));
    }

    #[test]
    fn test_from_lookup_missing_gateway_key() {
        let err =
            GeneratorConfig::from_lookup(lookup_from(&[("LAMBDA_PREFIX", "svc")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("GATEWAY_KEY")));
    }

    #[test]
    fn test_from_lookup_blank_lambda_prefix() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[
            ("GATEWAY_KEY", "api"),
            ("LAMBDA_PREFIX", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("LAMBDA_PREFIX")));
    }

    #[test]
    fn test_from_lookup_strict_flag() {
        for (raw, expected) in [
            ("1", true),
            ("TRUE", true),
            ("yes", true),
            ("on", false),
            ("0", false),
            ("", false),
        ] {
            let config = GeneratorConfig::from_lookup(lookup_from(&[
                ("GATEWAY_KEY", "api"),
                ("LAMBDA_PREFIX", "svc"),
                ("STRICT_VALIDATION", raw),
            ]))
            .unwrap();
            assert_eq!(config.is_strict(), expected, "STRICT_VALIDATION={raw:?}");
        }
    }

    #[test]
    fn test_with_strict() {
        let config = GeneratorConfig::new("api", "svc").with_strict(true);
        assert!(config.is_strict());
    }
}
