// tests/src/suites/kat/error.rs
//! Structured error types for the KAT harness

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    #[error("i/o error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("hex decode error in field '{field}': {source}")]
    Hex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("vector {count}: missing required field: {field}")]
    MissingField { count: u32, field: &'static str },

    #[error("vector {count}: field '{field}' has {actual} bytes, expected {expected}")]
    FieldLength {
        count: u32,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("vector {count}: {field} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        count: u32,
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("crypto operation failed: {0}")]
    Crypto(#[from] kyber_api::Error),
}

pub type Result<T> = std::result::Result<T, KatError>;
