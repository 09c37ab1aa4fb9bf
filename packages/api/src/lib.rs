//! Certiva Public API
//!
//! Certificate validation client for the issuer's registry. A visitor's
//! cédula is looked up against the registry and the result is rendered as
//! either a formatted certificate summary or one fixed failure notice.
//!
//! ```no_run
//! use certiva::Certiva;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let validator = Certiva::validator()
//!     .base_url("https://backendcoalianza.vercel.app")
//!     .build()?;
//!
//! let certificate = validator.validate("1234567890").await?;
//! println!("{}", certiva::render::certificate_summary(&certificate));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod render;

pub use builder::ValidatorBuilder;

// Re-export important types from client package
pub use certiva_client::{
    format_display_date, Certificate, CertificateValidator, ConfigError, LookupOutcome,
    RegistryConfig, SessionPhase, ValidationError, ValidationSession,
};

/// Main entry point providing static builder methods
pub struct Certiva;

impl Certiva {
    /// Create a validator builder against the default registry
    ///
    /// Shorthand for `ValidatorBuilder::new()`
    #[must_use]
    pub fn validator() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }
}

/// Create a validator builder against the default registry
///
/// Shorthand for `ValidatorBuilder::new()`
#[must_use]
pub fn validator() -> ValidatorBuilder {
    ValidatorBuilder::new()
}
