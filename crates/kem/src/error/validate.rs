//! Validation utilities for KEM operations

use super::{Error, Result};

/// Validate an exact byte length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a requested shared-secret length.
///
/// Zero is always rejected. When the instantiation's KDF has a fixed output
/// size, any other length is a length error.
pub fn secret_length(requested: usize, fixed: Option<usize>) -> Result<()> {
    if requested == 0 {
        return Err(Error::Parameter {
            context: "shared secret",
            reason: "length must be positive",
        });
    }
    if let Some(expected) = fixed {
        length("shared secret", requested, expected)?;
    }
    Ok(())
}
