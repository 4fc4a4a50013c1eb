//! Error handling for recipient KEM operations

use core::fmt;

use crate::curve::CurveKind;

pub mod validate;

/// Error type for recipient KEM operations.
///
/// Every fallible operation in this crate fails fast with one of these kinds;
/// errors from the derivation step propagate to the caller unchanged. Callers
/// should treat any error as fatal to the current decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or inconsistent caller-supplied data: empty or mis-sized
    /// private key, wrong curve for a strategy, malformed or off-curve KEM
    /// bytes, or a point format the curve does not support.
    InvalidArgument {
        /// Operation that rejected the input
        context: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },

    /// The requested curve kind has no implemented strategy.
    UnsupportedCurve {
        /// The curve that was requested
        curve: CurveKind,
    },

    /// The underlying arithmetic failed despite well-formed inputs, e.g. a
    /// private scalar outside the group order.
    Internal {
        /// Operation in which the arithmetic failed
        context: &'static str,
    },
}

/// Result type for recipient KEM operations.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
            Error::UnsupportedCurve { curve } => {
                write!(f, "unsupported curve: {}", curve)
            }
            Error::Internal { context } => {
                write!(f, "internal error: {}", context)
            }
        }
    }
}

impl std::error::Error for Error {}
