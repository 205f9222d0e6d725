//! Error type returned by tick processors.
//!
//! A tick processor must be total over all reachable states; an `Err`
//! signals an unrecoverable domain-invariant violation. The scheduler
//! never catches these — continuing to advance simulated time over a
//! possibly-corrupted state would produce undefined downstream behavior
//! in the domain calculators, so the error surfaces to the caller
//! unmodified.

use std::error::Error;
use std::fmt;

/// Unrecoverable failure reported by a tick processor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessError {
    /// A domain invariant no longer holds over the current state.
    InvariantViolated {
        /// Human-readable description of the violated invariant.
        reason: String,
    },
    /// Data the processor requires was missing or unreadable.
    StateUnavailable {
        /// Description of what could not be obtained.
        what: String,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolated { reason } => {
                write!(f, "domain invariant violated: {reason}")
            }
            Self::StateUnavailable { what } => {
                write!(f, "required state unavailable: {what}")
            }
        }
    }
}

impl Error for ProcessError {}
