// Path: crates/algorithms/src/poly/polyvec.rs
//! Runtime-rank vectors of ring elements
//!
//! The rank k is a property of the parameter set, so vectors carry it at
//! runtime rather than in the type. Operations that combine two vectors
//! require equal rank and panic otherwise, since a mismatch can only come
//! from a programming error in the protocol layer.

use super::polynomial::{NttPoly, Poly};
use zeroize::Zeroize;

/// A vector of normal-domain polynomials
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct PolyVec {
    polys: Vec<Poly>,
}

/// A vector of NTT-domain polynomials
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct NttPolyVec {
    polys: Vec<NttPoly>,
}

impl PolyVec {
    /// Wraps a list of polynomials
    pub fn from_polys(polys: Vec<Poly>) -> Self {
        Self { polys }
    }

    /// Number of polynomials
    pub fn rank(&self) -> usize {
        self.polys.len()
    }

    /// Polynomial view
    pub fn polys(&self) -> &[Poly] {
        &self.polys
    }

    /// Transforms every element into the NTT domain
    pub fn ntt(self) -> NttPolyVec {
        NttPolyVec {
            polys: self.polys.into_iter().map(Poly::ntt).collect(),
        }
    }

    /// Element-wise sum, reduced
    pub fn add(&self, other: &PolyVec) -> PolyVec {
        assert_eq!(self.rank(), other.rank(), "polynomial vector rank mismatch");
        PolyVec {
            polys: self
                .polys
                .iter()
                .zip(other.polys.iter())
                .map(|(a, b)| a.add(b))
                .collect(),
        }
    }
}

impl NttPolyVec {
    /// Wraps a list of NTT-domain polynomials
    pub fn from_polys(polys: Vec<NttPoly>) -> Self {
        Self { polys }
    }

    /// Number of polynomials
    pub fn rank(&self) -> usize {
        self.polys.len()
    }

    /// Polynomial view
    pub fn polys(&self) -> &[NttPoly] {
        &self.polys
    }

    /// Transforms every element back to the normal domain
    pub fn inv_ntt(self) -> PolyVec {
        PolyVec {
            polys: self.polys.into_iter().map(NttPoly::inv_ntt).collect(),
        }
    }

    /// Inner product `sum_i self[i] * other[i]` in the NTT domain.
    ///
    /// The products are accumulated unreduced and the sum gets a single
    /// Barrett pass, so the result is canonical.
    pub fn pointwise_accumulate(&self, other: &NttPolyVec) -> NttPoly {
        assert_eq!(self.rank(), other.rank(), "polynomial vector rank mismatch");
        let mut acc = NttPoly::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc.add_assign(&a.pointwise_mul(b));
        }
        acc.reduce();
        acc
    }

    /// Element-wise sum without reduction
    pub fn add_assign(&mut self, other: &NttPolyVec) {
        assert_eq!(self.rank(), other.rank(), "polynomial vector rank mismatch");
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b);
        }
    }

    /// Reduces every element into `[0, q)`
    pub fn reduce(&mut self) {
        self.polys.iter_mut().for_each(NttPoly::reduce);
    }

    /// Moves every element into the Montgomery domain
    pub fn to_mont(&mut self) {
        self.polys.iter_mut().for_each(NttPoly::to_mont);
    }
}

/// Matrix-vector product in the NTT domain.
///
/// Row `i` of the result is `rows[i] . v`. Used for `A s` at key generation
/// and `A^T r` at encryption; the caller chooses which by how it expanded
/// the rows.
pub fn matrix_mul(rows: &[NttPolyVec], v: &NttPolyVec) -> NttPolyVec {
    NttPolyVec {
        polys: rows.iter().map(|row| row.pointwise_accumulate(v)).collect(),
    }
}
