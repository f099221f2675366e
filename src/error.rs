//! Error types for scratch allocation.

use std::collections::TryReserveError;
use std::fmt;

/// Errors that can occur while acquiring auxiliary storage.
///
/// None of the public sorting or probing entry points return this, the probes consume it locally
/// and fall back to an allocation free algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScratchError {
    /// The request would exceed the configured scratch budget.
    BudgetExceeded { requested: usize, remaining: usize },

    /// The global allocator refused the request, or the size computation overflowed.
    Alloc(TryReserveError),
}

impl fmt::Display for ScratchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScratchError::BudgetExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "scratch budget exceeded: requested {} bytes, {} remaining",
                    requested, remaining
                )
            }
            ScratchError::Alloc(err) => {
                write!(f, "scratch allocation failed: {}", err)
            }
        }
    }
}

impl std::error::Error for ScratchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScratchError::BudgetExceeded { .. } => None,
            ScratchError::Alloc(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for ScratchError {
    fn from(err: TryReserveError) -> Self {
        ScratchError::Alloc(err)
    }
}
