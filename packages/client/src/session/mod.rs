//! Validation session state.
//!
//! Tracking the lookup flow with independent loading/error/success flags
//! admits combinations no screen should ever show. The flow here is one
//! tagged phase: a session is editing, loading, or settled on an outcome,
//! never more than one at a time.

use crate::registry::Certificate;

/// Outcome of a settled lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A certificate was found and is held for display until the next
    /// reset or re-query.
    Verified(Certificate),

    /// The lookup failed; only the fixed user-facing message survives.
    Rejected {
        /// Fixed, non-specific message shown to the user.
        message: &'static str,
    },
}

/// The mutually exclusive phases of a validation session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Accepting identifier input.
    #[default]
    Editing,

    /// A lookup is in flight. Submission is refused in this phase.
    Loading,

    /// The lookup settled.
    Result(LookupOutcome),
}

/// State owned by one active validation screen.
///
/// There is no shared mutable state beyond this value; each presentation
/// context owns exactly one session.
#[derive(Debug, Clone, Default)]
pub struct ValidationSession {
    identifier: String,
    phase: SessionPhase,
}

impl ValidationSession {
    /// Create a session in the editing phase with no identifier.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current identifier input.
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Replace the identifier input.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Whether a lookup is in flight.
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    /// Whether a new lookup may start. This is the advisory re-entrancy
    /// guard: the one mechanism preventing overlapping requests.
    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// Enter the loading phase, clearing any prior outcome.
    pub fn begin_lookup(&mut self) {
        self.phase = SessionPhase::Loading;
    }

    /// Settle the session on an outcome.
    pub fn settle(&mut self, outcome: LookupOutcome) {
        self.phase = SessionPhase::Result(outcome);
    }

    /// The certificate held by a verified session, if any.
    #[must_use]
    pub fn certificate(&self) -> Option<&Certificate> {
        match &self.phase {
            SessionPhase::Result(LookupOutcome::Verified(certificate)) => Some(certificate),
            _ => None,
        }
    }

    /// The failure message of a rejected session, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match &self.phase {
            SessionPhase::Result(LookupOutcome::Rejected { message }) => Some(message),
            _ => None,
        }
    }

    /// Return to the editing phase, clearing the identifier and any
    /// outcome. Always available; cannot fail.
    pub fn reset(&mut self) {
        self.identifier.clear();
        self.phase = SessionPhase::Editing;
    }
}
