//! Error handling for KEM operations

use kyber_algorithms::error::Error as PrimitiveError;
use kyber_api::error::Error as CoreError;
use thiserror::Error;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Error raised by the arithmetic or codec layer
    #[error("primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Serialized input has the wrong byte count
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The hash stored in a secret key does not match its embedded public key
    #[error("{context}: stored public key hash does not match")]
    KeyMismatch { context: &'static str },

    /// All-zero seed handed to deterministic key generation
    #[error("{context}: all-zero seed rejected")]
    InvalidSeed { context: &'static str },

    /// An operation argument is out of range
    #[error("invalid parameter for {context}: {reason}")]
    Parameter {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::KeyMismatch { context } => CoreError::KeyMismatch { context },
            Error::InvalidSeed { context } => CoreError::InvalidSeed { context },
            Error::Parameter { context, reason } => CoreError::param(context, reason),
        }
    }
}

pub mod validate;
