//! Validation helpers for recipient KEM operations

use super::{Error, Result};
use crate::curve::CurveKind;

/// Validate a caller-supplied argument.
pub fn arg(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidArgument { context, reason });
    }
    Ok(())
}

/// Validate that a curve kind is handled by the selected strategy.
pub fn curve(condition: bool, curve: CurveKind) -> Result<()> {
    if !condition {
        return Err(Error::UnsupportedCurve { curve });
    }
    Ok(())
}
