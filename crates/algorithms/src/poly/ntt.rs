// Path: crates/algorithms/src/poly/ntt.rs
//! Number Theoretic Transform over Z_q[X]/(X^256 + 1)
//!
//! The forward transform leaves a polynomial as 128 residues modulo
//! degree-2 factors `X^2 - zeta`; multiplication in that representation is
//! [`basemul`] applied pairwise. Both transforms work in place on the raw
//! coefficient array; the domain-typed wrappers live in
//! [`super::polynomial`].

use super::reduce::{barrett_reduce, fqmul};
use kyber_params::pqc::kyber::KYBER_N;

/// Powers of the primitive 256th root of unity 17, in bit-reversed order
/// and Montgomery form.
pub const ZETAS: [i16; 128] = [
    2285, 2571, 2970, 1812, 1493, 1422,  287,  202,
    3158,  622, 1577,  182,  962, 2127, 1855, 1468,
     573, 2004,  264,  383, 2500, 1458, 1727, 3199,
    2648, 1017,  732,  608, 1787,  411, 3124, 1758,
    1223,  652, 2777, 1015, 2036, 1491, 3047, 1785,
     516, 3321, 3009, 2663, 1711, 2167,  126, 1469,
    2476, 3239, 3058,  830,  107, 1908, 3082, 2378,
    2931,  961, 1821, 2604,  448, 2264,  677, 2054,
    2226,  430,  555,  843, 2078,  871, 1550,  105,
     422,  587,  177, 3094, 3038, 2869, 1574, 1653,
    3083,  778, 1159, 3182, 2552, 1483, 2727, 1119,
    1739,  644, 2457,  349,  418,  329, 3173, 3254,
     817, 1097,  603,  610, 1322, 2044, 1864,  384,
    2114, 3193, 1218, 1994, 2455,  220, 2142, 1670,
    2144, 1799, 2051,  794, 1819, 2475, 2459,  478,
    3221, 3021,  996,  991,  958, 1869, 1522, 1628,];

/// Twiddles for the inverse transform. The last entry is the final scale
/// factor `2^32 / 128 mod q`.
pub const ZETAS_INV: [i16; 128] = [
    1701, 1807, 1460, 2371, 2338, 2333,  308,  108,
    2851,  870,  854, 1510, 2535, 1278, 1530, 1185,
    1659, 1187, 3109,  874, 1335, 2111,  136, 1215,
    2945, 1465, 1285, 2007, 2719, 2726, 2232, 2512,
      75,  156, 3000, 2911, 2980,  872, 2685, 1590,
    2210,  602, 1846,  777,  147, 2170, 2551,  246,
    1676, 1755,  460,  291,  235, 3152, 2742, 2907,
    3224, 1779, 2458, 1251, 2486, 2774, 2899, 1103,
    1275, 2652, 1065, 2881,  725, 1508, 2368,  398,
     951,  247, 1421, 3222, 2499,  271,   90,  853,
    1860, 3203, 1162, 1618,  666,  320,    8, 2813,
    1544,  282, 1838, 1293, 2314,  552, 2677, 2106,
    1571,  205, 2918, 1542, 2721, 2597, 2312,  681,
     130, 1602, 1871,  829, 2946, 3065, 1325, 2756,
    1861, 1474, 1202, 2367, 3147, 1752, 2707,  171,
    3127, 3042, 1907, 1836, 1517,  359,  758, 1441,];

/// Forward NTT in place.
///
/// Input coefficients must be bounded by q in absolute value. The output is
/// in bit-reversed order with every coefficient in `[0, q)`.
pub fn ntt(r: &mut [i16; KYBER_N]) {
    let mut k = 1;
    let mut len = 128;
    while len >= 2 {
        let mut start = 0;
        while start < KYBER_N {
            let zeta = ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = fqmul(zeta, r[j + len]);
                r[j + len] = r[j] - t;
                r[j] += t;
            }
            start += 2 * len;
        }
        len >>= 1;
    }
    for c in r.iter_mut() {
        *c = barrett_reduce(*c);
    }
}

/// Inverse NTT in place, multiplying by the Montgomery factor 2^16.
///
/// The extra factor cancels the 2^-16 that [`basemul`] introduces, so
/// `invntt(basemul(ntt(a), ntt(b)))` is the plain product `a * b`.
/// Output coefficients are bounded by q in absolute value.
pub fn invntt(r: &mut [i16; KYBER_N]) {
    let mut k = 0;
    let mut len = 2;
    while len <= 128 {
        let mut start = 0;
        while start < KYBER_N {
            let zeta = ZETAS_INV[k];
            k += 1;
            for j in start..start + len {
                let t = r[j];
                r[j] = barrett_reduce(t + r[j + len]);
                r[j + len] = fqmul(zeta, t - r[j + len]);
            }
            start += 2 * len;
        }
        len <<= 1;
    }
    let f = ZETAS_INV[127];
    for c in r.iter_mut() {
        *c = fqmul(*c, f);
    }
}

/// Multiplication of two degree-1 residues modulo `X^2 - zeta`.
///
/// Returns `(a0*b0 + zeta*a1*b1, a0*b1 + a1*b0)` scaled by 2^-16.
#[inline(always)]
pub fn basemul(a: [i16; 2], b: [i16; 2], zeta: i16) -> [i16; 2] {
    let r0 = fqmul(fqmul(a[1], b[1]), zeta) + fqmul(a[0], b[0]);
    let r1 = fqmul(a[0], b[1]) + fqmul(a[1], b[0]);
    [r0, r1]
}

/// Pointwise product of two NTT-domain polynomials.
///
/// Each group of four coefficients holds two residues; the second uses the
/// negated root.
pub fn poly_basemul(a: &[i16; KYBER_N], b: &[i16; KYBER_N]) -> [i16; KYBER_N] {
    let mut r = [0i16; KYBER_N];
    for i in 0..KYBER_N / 4 {
        let zeta = ZETAS[64 + i];
        let j = 4 * i;
        let lo = basemul([a[j], a[j + 1]], [b[j], b[j + 1]], zeta);
        let hi = basemul([a[j + 2], a[j + 3]], [b[j + 2], b[j + 3]], -zeta);
        r[j..j + 2].copy_from_slice(&lo);
        r[j + 2..j + 4].copy_from_slice(&hi);
    }
    r
}
