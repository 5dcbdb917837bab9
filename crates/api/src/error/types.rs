//! Error type definitions for KEM operations

use thiserror::Error;

/// Primary error type for every public operation in the workspace.
///
/// Malformed ciphertexts of the correct length are deliberately absent: they
/// are absorbed by implicit rejection and never surface as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Serialized input is not the exact byte count expected for its type
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The public-key hash stored in a secret key does not match the
    /// embedded public key
    #[error("{context}: embedded public key does not match its stored hash")]
    KeyMismatch { context: &'static str },

    /// A deterministic key derivation was handed an all-zero seed
    #[error("{context}: key seed must not be all zeros")]
    InvalidSeed { context: &'static str },

    /// Invalid parameter error
    #[error("invalid parameter for {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context attached to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::KeyMismatch { .. } => Self::KeyMismatch { context },
            Self::InvalidSeed { .. } => Self::InvalidSeed { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Shorthand for building an [`Error::InvalidParameter`]
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}
