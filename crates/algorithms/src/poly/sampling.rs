//! sampling.rs - Uniform and centered-binomial sampling from keystreams

use super::polynomial::{NttPoly, Poly};
use super::polyvec::NttPolyVec;
use crate::error::{validate, Result};
use crate::xof::Keystream;
use kyber_params::pqc::kyber::{KYBER_N, KYBER_Q};

/// Bytes pulled from a keystream per rejection-sampling round.
///
/// Equal to the SHAKE-128 rate and a multiple of three, so candidates never
/// straddle two rounds.
pub const UNIFORM_CHUNK_BYTES: usize = 168;

/// Bytes of keystream consumed by one CBD sample of width `eta`
pub const fn cbd_bytes(eta: usize) -> usize {
    eta * KYBER_N / 4
}

/// Parses 12-bit candidates out of `buf` into `out`, keeping those below q.
///
/// Returns how many coefficients were written.
fn rej_uniform(out: &mut [i16], buf: &[u8]) -> usize {
    let mut ctr = 0;
    for chunk in buf.chunks_exact(3) {
        if ctr >= out.len() {
            break;
        }
        let d1 = u16::from(chunk[0]) | (u16::from(chunk[1]) & 0x0f) << 8;
        let d2 = u16::from(chunk[1]) >> 4 | u16::from(chunk[2]) << 4;

        if d1 < KYBER_Q {
            out[ctr] = d1 as i16;
            ctr += 1;
        }
        if ctr < out.len() && d2 < KYBER_Q {
            out[ctr] = d2 as i16;
            ctr += 1;
        }
    }
    ctr
}

/// Draws a uniformly random NTT-domain polynomial from `stream` by
/// rejection sampling.
///
/// The stream is read in fixed chunks until 256 coefficients are accepted;
/// unused bytes of the last chunk are discarded.
pub fn sample_uniform<S: Keystream + ?Sized>(stream: &mut S) -> NttPoly {
    let mut coeffs = [0i16; KYBER_N];
    let mut buf = [0u8; UNIFORM_CHUNK_BYTES];
    let mut ctr = 0;
    while ctr < KYBER_N {
        stream.squeeze(&mut buf);
        ctr += rej_uniform(&mut coeffs[ctr..], &buf);
    }
    NttPoly::from_coeffs(coeffs)
}

/// Expands the public matrix from the seed `rho`.
///
/// `xof(rho, a, b)` must return the stream for byte pair `(a, b)`. With
/// `transposed == false` entry `[i][j]` uses `(j, i)`, giving `A`; with
/// `transposed == true` it uses `(i, j)`, giving `A^T`. Rows are returned
/// so that [`super::polyvec::matrix_mul`] computes `A v` or `A^T v`.
pub fn expand_matrix<S, F>(rho: &[u8; 32], k: usize, transposed: bool, mut xof: F) -> Vec<NttPolyVec>
where
    S: Keystream,
    F: FnMut(&[u8; 32], u8, u8) -> S,
{
    (0..k)
        .map(|i| {
            let row = (0..k)
                .map(|j| {
                    let (a, b) = if transposed { (i, j) } else { (j, i) };
                    let mut stream = xof(rho, a as u8, b as u8);
                    sample_uniform(&mut stream)
                })
                .collect();
            NttPolyVec::from_polys(row)
        })
        .collect()
}

/// Centered binomial sample with eta = 2 from 128 bytes
fn cbd2(buf: &[u8]) -> [i16; KYBER_N] {
    let mut r = [0i16; KYBER_N];
    for (i, chunk) in buf.chunks_exact(4).enumerate() {
        let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let mut d = t & 0x5555_5555;
        d += (t >> 1) & 0x5555_5555;
        for j in 0..8 {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            r[8 * i + j] = a - b;
        }
    }
    r
}

/// Centered binomial sample with eta = 3 from 192 bytes
fn cbd3(buf: &[u8]) -> [i16; KYBER_N] {
    let mut r = [0i16; KYBER_N];
    for (i, chunk) in buf.chunks_exact(3).enumerate() {
        let t = u32::from(chunk[0]) | u32::from(chunk[1]) << 8 | u32::from(chunk[2]) << 16;
        let mut d = t & 0x0024_9249;
        d += (t >> 1) & 0x0024_9249;
        d += (t >> 2) & 0x0024_9249;
        for j in 0..4 {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            r[4 * i + j] = a - b;
        }
    }
    r
}

/// Applies the centered binomial distribution of width `eta` to `buf`.
///
/// `buf` must hold exactly `eta * 64` bytes. Coefficients are drawn from
/// `[-eta, eta]` and returned reduced into `[0, q)`.
pub fn sample_cbd(buf: &[u8], eta: usize) -> Result<Poly> {
    validate::parameter(eta == 2 || eta == 3, "eta", "must be 2 or 3")?;
    validate::length("CBD input", buf.len(), cbd_bytes(eta))?;
    let coeffs = if eta == 2 { cbd2(buf) } else { cbd3(buf) };
    Ok(Poly::from_coeffs(coeffs))
}

/// Draws `eta * 64` bytes from `stream` and samples a noise polynomial
pub fn sample_noise<S: Keystream + ?Sized>(stream: &mut S, eta: usize) -> Result<Poly> {
    let mut buf = [0u8; cbd_bytes(3)];
    let len = cbd_bytes(eta).min(buf.len());
    stream.squeeze(&mut buf[..len]);
    sample_cbd(&buf[..len], eta)
}
