// Path: crates/algorithms/src/poly/polynomial.rs
//! Domain-typed ring elements
//!
//! A [`Poly`] lives in the normal (coefficient) domain and an [`NttPoly`] in
//! the NTT domain. The only ways across are [`Poly::ntt`] and
//! [`NttPoly::inv_ntt`], so transforming a value twice in the same direction
//! does not type-check.
//!
//! Every `Poly` handed out by this crate has its coefficients in `[0, q)`.
//! `NttPoly` coefficients are only guaranteed to be bounded well inside the
//! `i16` range; canonical form is restored by [`NttPoly::reduce`].

use super::ntt;
use super::reduce::{barrett_reduce, fqmul, MONT_SQ};
use kyber_params::pqc::kyber::KYBER_N;
use zeroize::Zeroize;

/// A polynomial in the normal domain, coefficients in `[0, q)`
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Poly {
    coeffs: [i16; KYBER_N],
}

/// A polynomial in the NTT domain
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct NttPoly {
    coeffs: [i16; KYBER_N],
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Default for NttPoly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Poly {
    /// The zero polynomial
    pub const fn zero() -> Self {
        Self {
            coeffs: [0; KYBER_N],
        }
    }

    /// Builds a polynomial from arbitrary signed coefficients, reducing each
    /// into `[0, q)`.
    pub fn from_coeffs(mut coeffs: [i16; KYBER_N]) -> Self {
        for c in coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
        Self { coeffs }
    }

    /// Coefficient view
    pub fn coeffs(&self) -> &[i16; KYBER_N] {
        &self.coeffs
    }

    /// Forward transform into the NTT domain
    pub fn ntt(mut self) -> NttPoly {
        ntt::ntt(&mut self.coeffs);
        NttPoly {
            coeffs: self.coeffs,
        }
    }

    /// Coefficient-wise sum, reduced
    pub fn add(&self, other: &Poly) -> Poly {
        let mut coeffs = [0i16; KYBER_N];
        for (r, (a, b)) in coeffs.iter_mut().zip(self.coeffs.iter().zip(other.coeffs.iter())) {
            *r = barrett_reduce(a + b);
        }
        Poly { coeffs }
    }

    /// Coefficient-wise difference, reduced
    pub fn sub(&self, other: &Poly) -> Poly {
        let mut coeffs = [0i16; KYBER_N];
        for (r, (a, b)) in coeffs.iter_mut().zip(self.coeffs.iter().zip(other.coeffs.iter())) {
            *r = barrett_reduce(a - b);
        }
        Poly { coeffs }
    }
}

impl NttPoly {
    /// The zero polynomial
    pub const fn zero() -> Self {
        Self {
            coeffs: [0; KYBER_N],
        }
    }

    /// Wraps coefficients that are already in the NTT domain.
    ///
    /// Values must lie in `[0, 2^12)`, which covers both canonical
    /// coefficients and anything a 12-bit decoder can produce.
    pub fn from_coeffs(coeffs: [i16; KYBER_N]) -> Self {
        debug_assert!(coeffs.iter().all(|&c| (0..1 << 12).contains(&c)));
        Self { coeffs }
    }

    /// Coefficient view
    pub fn coeffs(&self) -> &[i16; KYBER_N] {
        &self.coeffs
    }

    /// Inverse transform back to the normal domain.
    ///
    /// The transform multiplies by the Montgomery factor, which cancels the
    /// factor left behind by [`NttPoly::pointwise_mul`]. The result is
    /// reduced into `[0, q)`.
    pub fn inv_ntt(mut self) -> Poly {
        ntt::invntt(&mut self.coeffs);
        Poly::from_coeffs(self.coeffs)
    }

    /// Pointwise product in the NTT domain, scaled by `2^-16`
    pub fn pointwise_mul(&self, other: &NttPoly) -> NttPoly {
        NttPoly {
            coeffs: ntt::poly_basemul(&self.coeffs, &other.coeffs),
        }
    }

    /// Coefficient-wise sum without reduction
    pub fn add_assign(&mut self, other: &NttPoly) {
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a += b;
        }
    }

    /// Barrett-reduces every coefficient into `[0, q)`
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Multiplies every coefficient by `2^16`, moving the value into the
    /// Montgomery domain.
    pub fn to_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = fqmul(*c, MONT_SQ);
        }
    }
}
