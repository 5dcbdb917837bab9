//! Public API traits and types for the kyber workspace
//!
//! This crate provides the public API surface shared by every member crate:
//! the KEM and serialization traits, and the error type returned by all
//! public operations.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
