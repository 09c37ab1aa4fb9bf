//! Validation error types.
//!
//! Exactly two failure kinds exist for a lookup. [`ValidationError::EmptyInput`]
//! is the local pre-flight check and never reaches the network.
//! [`ValidationError::LookupFailed`] is the catch-all: not-found, malformed
//! identifier, server error, and transport failure are deliberately
//! indistinguishable to the caller.

/// Errors surfaced by a certificate validation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The identifier was empty after trimming whitespace. No request was
    /// issued.
    #[error("identifier is empty after trimming")]
    EmptyInput,

    /// The registry did not yield a certificate. Covers non-success
    /// statuses, transport failures, and undecodable bodies alike.
    #[error("no valid certificate was found for this identifier")]
    LookupFailed,
}

impl ValidationError {
    /// Fixed user-facing message for this failure, as the certificate
    /// screens display it.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Por favor ingrese un número de cédula válido",
            Self::LookupFailed => {
                "No se encontró un certificado válido para este número de documento"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_fixed() {
        assert_eq!(
            ValidationError::EmptyInput.user_message(),
            "Por favor ingrese un número de cédula válido"
        );
        assert_eq!(
            ValidationError::LookupFailed.user_message(),
            "No se encontró un certificado válido para este número de documento"
        );
    }
}
