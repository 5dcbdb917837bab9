//! serialize.rs - Fixed-width and compressed coefficient codecs
//!
//! All layouts pack coefficient `i` into bits `[i*d, (i+1)*d)` of a
//! little-endian bit stream, least significant bit first. At d = 12 this is
//! the lossless key encoding; d in {1, 4, 5, 10, 11} are the lossy
//! compression widths, with d = 1 doubling as the message encoding.

use super::polynomial::{NttPoly, Poly};
use super::polyvec::{NttPolyVec, PolyVec};
use super::reduce::Q;
use crate::error::{validate, Error, Result};
use kyber_params::pqc::kyber::{KYBER_MSG_BYTES, KYBER_N, KYBER_POLY_BYTES, KYBER_Q};

/// Compression widths accepted by [`compress`] and [`decompress`]
pub const COMPRESSION_BITS: [usize; 5] = [1, 4, 5, 10, 11];

/// Bytes of one polynomial packed at `d` bits per coefficient
pub const fn packed_bytes(d: usize) -> usize {
    KYBER_N * d / 8
}

fn pack_bits(values: &[u16; KYBER_N], d: usize, out: &mut [u8]) {
    let mut acc: u32 = 0;
    let mut bits = 0;
    let mut idx = 0;
    for &v in values.iter() {
        acc |= u32::from(v) << bits;
        bits += d;
        while bits >= 8 {
            out[idx] = acc as u8;
            idx += 1;
            acc >>= 8;
            bits -= 8;
        }
    }
}

fn unpack_bits(bytes: &[u8], d: usize) -> [u16; KYBER_N] {
    let mask = (1u32 << d) - 1;
    let mut out = [0u16; KYBER_N];
    let mut acc: u32 = 0;
    let mut bits = 0;
    let mut idx = 0;
    for v in out.iter_mut() {
        while bits < d {
            acc |= u32::from(bytes[idx]) << bits;
            idx += 1;
            bits += 8;
        }
        *v = (acc & mask) as u16;
        acc >>= d;
        bits -= d;
    }
    out
}

fn check_width(d: usize) -> Result<()> {
    validate::parameter(
        COMPRESSION_BITS.contains(&d),
        "compression bits",
        "must be one of 1, 4, 5, 10, 11",
    )
}

fn to_12bit(coeffs: &[i16; KYBER_N]) -> [u16; KYBER_N] {
    let mut values = [0u16; KYBER_N];
    for (v, &c) in values.iter_mut().zip(coeffs.iter()) {
        let c = c + ((c >> 15) & Q);
        *v = (c as u16) & 0x0fff;
    }
    values
}

/// Packs 256 coefficients at 12 bits each into `out` (384 bytes).
///
/// Negative inputs are lifted by q first; values must otherwise be below
/// 4096.
pub fn encode12(coeffs: &[i16; KYBER_N], out: &mut [u8]) -> Result<()> {
    validate::length("encode12 output", out.len(), KYBER_POLY_BYTES)?;
    pack_bits(&to_12bit(coeffs), 12, out);
    Ok(())
}

/// Unpacks 384 bytes into 256 coefficients in `[0, 4096)`
pub fn decode12(bytes: &[u8]) -> Result<[i16; KYBER_N]> {
    validate::length("decode12 input", bytes.len(), KYBER_POLY_BYTES)?;
    let values = unpack_bits(bytes, 12);
    let mut coeffs = [0i16; KYBER_N];
    for (c, &v) in coeffs.iter_mut().zip(values.iter()) {
        *c = v as i16;
    }
    Ok(coeffs)
}

/// Lossy compression of a polynomial to `d` bits per coefficient.
///
/// Each coefficient `x` maps to `round(x * 2^d / q) mod 2^d`.
pub fn compress(poly: &Poly, d: usize, out: &mut [u8]) -> Result<()> {
    check_width(d)?;
    validate::length("compressed polynomial", out.len(), packed_bytes(d))?;
    let mask = (1u32 << d) - 1;
    let q = u32::from(KYBER_Q);
    let mut values = [0u16; KYBER_N];
    for (v, &c) in values.iter_mut().zip(poly.coeffs().iter()) {
        let x = c as u32;
        *v = ((((x << d) + q / 2) / q) & mask) as u16;
    }
    pack_bits(&values, d, out);
    Ok(())
}

/// Inverse of [`compress`]: maps each `y` to `round(y * q / 2^d)`
pub fn decompress(bytes: &[u8], d: usize) -> Result<Poly> {
    check_width(d)?;
    validate::length("compressed polynomial", bytes.len(), packed_bytes(d))?;
    let q = u32::from(KYBER_Q);
    let values = unpack_bits(bytes, d);
    let mut coeffs = [0i16; KYBER_N];
    for (c, &v) in coeffs.iter_mut().zip(values.iter()) {
        *c = ((u32::from(v) * q + (1 << (d - 1))) >> d) as i16;
    }
    Ok(Poly::from_coeffs(coeffs))
}

impl Poly {
    /// Embeds a 32-byte message, one bit per coefficient, as 0 or (q+1)/2
    pub fn from_message(msg: &[u8; KYBER_MSG_BYTES]) -> Poly {
        let values = unpack_bits(msg, 1);
        let mut coeffs = [0i16; KYBER_N];
        for (c, &v) in coeffs.iter_mut().zip(values.iter()) {
            // 0 or 1665, branch-free
            *c = (0i16.wrapping_sub(v as i16)) & ((Q + 1) / 2);
        }
        Poly::from_coeffs(coeffs)
    }

    /// Extracts the message bit nearest to each coefficient
    pub fn to_message(&self) -> [u8; KYBER_MSG_BYTES] {
        let mut msg = [0u8; KYBER_MSG_BYTES];
        let q = u32::from(KYBER_Q);
        let mut values = [0u16; KYBER_N];
        for (v, &c) in values.iter_mut().zip(self.coeffs().iter()) {
            *v = ((((c as u32) << 1) + q / 2) / q & 1) as u16;
        }
        pack_bits(&values, 1, &mut msg);
        msg
    }
}

impl NttPoly {
    /// 12-bit encoding of this polynomial
    pub fn to_bytes(&self) -> [u8; KYBER_POLY_BYTES] {
        let mut out = [0u8; KYBER_POLY_BYTES];
        pack_bits(&to_12bit(self.coeffs()), 12, &mut out);
        out
    }

    /// Decodes a 12-bit encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<NttPoly> {
        Ok(NttPoly::from_coeffs(decode12(bytes)?))
    }
}

impl NttPolyVec {
    /// Concatenated 12-bit encodings of every element
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rank() * KYBER_POLY_BYTES);
        for poly in self.polys() {
            out.extend_from_slice(&poly.to_bytes());
        }
        out
    }

    /// Decodes `k` concatenated 12-bit polynomials
    pub fn from_bytes(bytes: &[u8], k: usize) -> Result<NttPolyVec> {
        validate::length("encoded polynomial vector", bytes.len(), k * KYBER_POLY_BYTES)?;
        let polys = bytes
            .chunks_exact(KYBER_POLY_BYTES)
            .map(NttPoly::from_bytes)
            .collect::<Result<Vec<_>>>()?;
        Ok(NttPolyVec::from_polys(polys))
    }
}

impl PolyVec {
    /// Compresses every element to `d` bits per coefficient
    pub fn compress(&self, d: usize) -> Result<Vec<u8>> {
        check_width(d)?;
        let mut out = vec![0u8; self.rank() * packed_bytes(d)];
        for (poly, chunk) in self.polys().iter().zip(out.chunks_exact_mut(packed_bytes(d))) {
            compress(poly, d, chunk)?;
        }
        Ok(out)
    }

    /// Decompresses `k` polynomials packed at `d` bits per coefficient
    pub fn decompress(bytes: &[u8], k: usize, d: usize) -> Result<PolyVec> {
        check_width(d)?;
        if bytes.len() != k * packed_bytes(d) {
            return Err(Error::Length {
                context: "compressed polynomial vector",
                expected: k * packed_bytes(d),
                actual: bytes.len(),
            });
        }
        let polys = bytes
            .chunks_exact(packed_bytes(d))
            .map(|chunk| decompress(chunk, d))
            .collect::<Result<Vec<_>>>()?;
        Ok(PolyVec::from_polys(polys))
    }
}
