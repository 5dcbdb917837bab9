// Path: crates/algorithms/src/poly/reduce.rs
//! Scalar modular reduction over q = 3329
//!
//! Coefficients are carried as `i16` with headroom above q. The three
//! reductions here are total functions; none of them branch on their input.

use kyber_params::pqc::kyber::KYBER_Q;

/// The prime modulus as a signed coefficient
pub const Q: i16 = KYBER_Q as i16;

/// q^-1 mod 2^16, as a signed 16-bit value
pub const QINV: i16 = -3327;

/// 2^16 mod q, the Montgomery factor R
pub const MONT: i16 = 2285;

/// 2^32 mod q; multiplying by it under Montgomery reduction converts to
/// the Montgomery domain
pub const MONT_SQ: i16 = 1353;

const BARRETT_V: i32 = ((1 << 26) + KYBER_Q as i32 / 2) / KYBER_Q as i32;

/// Montgomery reduction: returns `a * 2^-16 mod q` in `(-q, q)`.
///
/// Requires `|a| < q * 2^15`.
#[inline(always)]
pub fn montgomery_reduce(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(QINV);
    ((a - (t as i32) * (Q as i32)) >> 16) as i16
}

/// Barrett reduction: returns the representative of `a` in `[0, q)`.
///
/// Defined for every `i16` input.
#[inline(always)]
pub fn barrett_reduce(a: i16) -> i16 {
    let t = (BARRETT_V * a as i32) >> 26;
    // floor-quotient estimate leaves the remainder in [0, q]
    let r = a as i32 - t * Q as i32;
    csubq(r as i16)
}

/// Conditional subtraction: returns `a - q` if `a >= q`, otherwise `a`.
///
/// Maps `[0, 2q)` onto `[0, q)`.
#[inline(always)]
pub fn csubq(a: i16) -> i16 {
    let a = a.wrapping_sub(Q);
    a.wrapping_add((a >> 15) & Q)
}

/// Montgomery multiplication: `a * b * 2^-16 mod q`
#[inline(always)]
pub fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce(a as i32 * b as i32)
}
