// Path: crates/algorithms/src/poly/mod.rs
//! Polynomial engine for Z_q[X]/(X^256 + 1), q = 3329
//!
//! Layered leaf-first: scalar reductions, the NTT, domain-typed ring
//! elements and vectors, sampling, and the byte codecs.

pub mod ntt;
pub mod polynomial;
pub mod polyvec;
pub mod reduce;
pub mod sampling;
pub mod serialize;

pub use polynomial::{NttPoly, Poly};
pub use polyvec::{matrix_mul, NttPolyVec, PolyVec};

/// Prelude for easy importing of common polynomial types and functions.
pub mod prelude {
    pub use super::polynomial::{NttPoly, Poly};
    pub use super::polyvec::{matrix_mul, NttPolyVec, PolyVec};
    pub use super::reduce::{barrett_reduce, csubq, montgomery_reduce};
    pub use super::sampling::{expand_matrix, sample_cbd, sample_noise, sample_uniform};
    pub use super::serialize::{compress, decode12, decompress, encode12};
}
