//! The shared certificate validator service.
//!
//! Both presentation contexts compose this one service; neither carries its
//! own lookup logic.

use crate::config::{ConfigError, RegistryConfig};
use crate::error::ValidationError;
use crate::registry::lookup::{self, RegistryHttpClient};
use crate::registry::Certificate;
use crate::session::{LookupOutcome, ValidationSession};

/// Certificate validator over a configured registry.
///
/// Construction validates the configuration and builds the HTTP client
/// once; each [`validate`](Self::validate) call issues exactly one request.
#[derive(Clone)]
pub struct CertificateValidator {
    config: RegistryConfig,
    http: RegistryHttpClient,
}

impl std::fmt::Debug for CertificateValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CertificateValidator {
    /// Build a validator from `config`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration fails validation.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = lookup::build_http_client(&config);
        Ok(Self { config, http })
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Look up the certificate for `identifier`.
    ///
    /// The identifier is trimmed first; an empty result fails with
    /// [`ValidationError::EmptyInput`] before any request is issued.
    /// Exactly one request goes out otherwise, and every downstream
    /// failure collapses into [`ValidationError::LookupFailed`].
    ///
    /// # Errors
    ///
    /// `EmptyInput` or `LookupFailed`, as above.
    pub async fn validate(&self, identifier: &str) -> Result<Certificate, ValidationError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        tracing::debug!(identifier, "issuing certificate lookup");
        let certificate = lookup::fetch_certificate(&self.http, &self.config, identifier).await?;
        tracing::debug!(
            document = %certificate.document_number,
            "certificate verified"
        );
        Ok(certificate)
    }

    /// Drive `session` through one full validation round using its current
    /// identifier.
    ///
    /// Refuses to overlap an in-flight lookup. An empty identifier settles
    /// the session immediately without entering the loading phase; any
    /// other input enters `Loading`, performs the lookup, and settles on
    /// the outcome. A started lookup always settles the session, even on
    /// failure.
    pub async fn run(&self, session: &mut ValidationSession) {
        if !session.can_submit() {
            tracing::debug!("lookup already in flight, submission refused");
            return;
        }

        let identifier = session.identifier().to_owned();
        if identifier.trim().is_empty() {
            session.settle(LookupOutcome::Rejected {
                message: ValidationError::EmptyInput.user_message(),
            });
            return;
        }

        session.begin_lookup();
        let outcome = match self.validate(&identifier).await {
            Ok(certificate) => LookupOutcome::Verified(certificate),
            Err(error) => LookupOutcome::Rejected {
                message: error.user_message(),
            },
        };
        session.settle(outcome);
    }
}
