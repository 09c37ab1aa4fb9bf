//! Registry client configuration.
//!
//! The base URL is the one functional option; the remaining fields are
//! transport knobs. Everything is resolved once when a validator is built
//! and validated up front, never per lookup.

use std::time::Duration;

use url::Url;

/// Default registry host. Any other target is plain configuration.
pub const DEFAULT_BASE_URL: &str = "https://backendcoalianza.vercel.app";

/// Default end-to-end request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection establishment timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent sent with every lookup.
pub const DEFAULT_USER_AGENT: &str = "certiva/0.1";

/// Registry client configuration.
///
/// Resolved once when a validator is built; individual lookups never
/// override it.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the certificate registry. The lookup path is appended
    /// to this value.
    pub base_url: Url,

    /// End-to-end request timeout.
    pub timeout: Duration,

    /// Connection establishment timeout.
    pub connect_timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            // The constant is known-good; a parse failure here is a defect
            // in the constant itself.
            base_url: Url::parse(DEFAULT_BASE_URL)
                .unwrap_or_else(|_| panic!("default registry URL must parse: {DEFAULT_BASE_URL}")),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Create a configuration pointed at `base_url`, all other fields at
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the URL does not parse or
    /// is not an http(s) URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        let config = Self {
            base_url: parsed,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration settings.
    ///
    /// # Errors
    ///
    /// - `InvalidBaseUrl` - if the scheme is not http or https
    /// - `InvalidTimeout` - if timeout values are zero or exceed limits
    /// - `InvalidUserAgent` - if the user agent is empty or oversized
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "unsupported scheme `{}`",
                self.base_url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "timeout must be greater than zero".to_string(),
            ));
        }
        if self.timeout.as_secs() > 3600 {
            return Err(ConfigError::InvalidTimeout(
                "timeout must not exceed 1 hour".to_string(),
            ));
        }

        if self.connect_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "connect timeout must be greater than zero".to_string(),
            ));
        }
        if self.connect_timeout.as_secs() > 300 {
            return Err(ConfigError::InvalidTimeout(
                "connect timeout must not exceed 5 minutes".to_string(),
            ));
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::InvalidUserAgent(
                "user agent cannot be empty".to_string(),
            ));
        }
        if self.user_agent.len() > 1000 {
            return Err(ConfigError::InvalidUserAgent(
                "user agent must not exceed 1000 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid registry base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("invalid user agent: {0}")]
    InvalidUserAgent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RegistryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url.as_str(), "https://backendcoalianza.vercel.app/");
    }

    #[test]
    fn with_base_url_overrides_only_the_host() {
        let config = RegistryConfig::with_base_url("http://127.0.0.1:9000").expect("valid config");
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        assert!(matches!(
            RegistryConfig::with_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!(matches!(
            RegistryConfig::with_base_url("ftp://registry.example.com"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = RegistryConfig {
            timeout: Duration::ZERO,
            ..RegistryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn empty_user_agent_is_rejected() {
        let config = RegistryConfig {
            user_agent: String::new(),
            ..RegistryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUserAgent(_))
        ));
    }
}
