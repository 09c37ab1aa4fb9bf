//! Fluent construction of a configured validator.
//!
//! The builder resolves a [`RegistryConfig`] once at startup; the validator
//! it produces is the single shared lookup service every presentation
//! context composes.

use std::time::Duration;

use certiva_client::{CertificateValidator, ConfigError, RegistryConfig};

/// Builder for a [`CertificateValidator`].
///
/// Unset fields fall back to the defaults in `RegistryConfig`.
#[derive(Debug, Clone, Default)]
pub struct ValidatorBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ValidatorBuilder {
    /// Create a builder with every field at its default.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the validator at a different registry host.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the end-to-end request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the connection establishment timeout.
    #[must_use]
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Override the user agent sent with every lookup.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Resolve the configuration and build the validator.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the base URL does not parse or any
    /// resolved setting fails validation.
    pub fn build(self) -> Result<CertificateValidator, ConfigError> {
        let mut config = match self.base_url {
            Some(raw) => RegistryConfig::with_base_url(&raw)?,
            None => RegistryConfig::default(),
        };
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(connect_timeout) = self.connect_timeout {
            config.connect_timeout = connect_timeout;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        CertificateValidator::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_validator_against_the_default_registry() {
        let validator = ValidatorBuilder::new().build().expect("default build");
        assert_eq!(
            validator.config().base_url.as_str(),
            "https://backendcoalianza.vercel.app/"
        );
    }

    #[test]
    fn overrides_are_applied_in_order() {
        let validator = ValidatorBuilder::new()
            .base_url("http://127.0.0.1:4010")
            .timeout(Duration::from_secs(5))
            .user_agent("certiva-tests/0")
            .build()
            .expect("valid build");

        let config = validator.config();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:4010/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "certiva-tests/0");
    }

    #[test]
    fn malformed_base_url_fails_the_build() {
        assert!(matches!(
            ValidatorBuilder::new().base_url("::/not-a-url").build(),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn zero_timeout_fails_the_build() {
        assert!(matches!(
            ValidatorBuilder::new().timeout(Duration::ZERO).build(),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }
}
