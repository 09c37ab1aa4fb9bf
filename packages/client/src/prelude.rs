//! Certiva Prelude
//!
//! This module contains the essential types that end users need for
//! certificate validation. Only canonical types that are part of the
//! public API belong here.

// Core validator service for performing lookups
pub use crate::validator::CertificateValidator;

// Registry data model
pub use crate::registry::Certificate;

// Session state machine
pub use crate::session::{LookupOutcome, SessionPhase, ValidationSession};

// Error types
pub use crate::error::ValidationError;

// Configuration
pub use crate::config::{ConfigError, RegistryConfig};

// Localized display formatting
pub use crate::display::format_display_date;

// URL handling
pub use url::Url;
