//! Arithmetic and sampling engine for Kyber
//!
//! This crate contains everything below the protocol layer: modular
//! reduction over q = 3329, the number-theoretic transform, domain-typed ring
//! elements and vectors, uniform and centered-binomial sampling, the key and
//! ciphertext codecs, the two keystream backends, and the NIST CTR-DRBG used
//! to reproduce known-answer tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial engine
pub mod poly;
pub use poly::{NttPoly, NttPolyVec, Poly, PolyVec};

// Keystream backends
pub mod xof;
pub use xof::{AesCtrStream, Keystream, ShakeStream};

// Deterministic random bit generator
pub mod drbg;
pub use drbg::CtrDrbg;
