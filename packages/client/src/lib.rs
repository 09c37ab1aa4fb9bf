//! # Certiva registry client
//!
//! Implementation crate for the certificate validation feature: registry
//! configuration, the single-lookup HTTP transport, the session state
//! machine, and localized display formatting.
//!
//! One shared [`CertificateValidator`] backs every presentation context.
//! A lookup issues exactly one outbound request; every failure past the
//! local empty-input check collapses into one user-facing outcome.
//!
//! The public surface is re-exported through the `certiva` crate.

#![deny(unsafe_code)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod display;
pub mod error;
pub mod registry;
pub mod session;
pub mod validator;

// Prelude with canonical types
pub mod prelude;

// Essential public API - only what end users actually need
pub use crate::prelude::*;
