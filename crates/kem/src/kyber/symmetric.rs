// kem/src/kyber/symmetric.rs

//! Symmetric primitives for the two Kyber variants.
//!
//! The standard variant builds everything from SHA-3: SHA3-256 and SHA3-512
//! for hashing, SHAKE-128 for matrix expansion, and SHAKE-256 for noise and
//! key derivation. The 90s variant swaps in SHA-256, SHA-512 and AES-256-CTR
//! and fixes the shared secret at 32 bytes.

use kyber_algorithms::xof::{AesCtrStream, Keystream, ShakeStream};
use sha2::{Digest, Sha256, Sha512};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Sha3_256, Sha3_512, Shake128Reader, Shake256, Shake256Reader};

use super::params::KYBER_SYMBYTES;

/// Hash, keystream and KDF functions for one Kyber variant.
pub trait SymmetricSuite: Send + Sync + 'static {
    /// Keystream used to expand the public matrix.
    type Xof: Keystream;
    /// Keystream used to sample noise.
    type Prf: Keystream;

    /// Output length the KDF is restricted to, if any.
    const FIXED_SECRET_BYTES: Option<usize>;

    /// H: 32-byte hash of the concatenation of `parts`.
    fn hash_h(parts: &[&[u8]]) -> [u8; KYBER_SYMBYTES];

    /// G: 64-byte hash of the concatenation of `parts`.
    fn hash_g(parts: &[&[u8]]) -> [u8; 2 * KYBER_SYMBYTES];

    /// XOF seeded with `rho` and the byte pair `(a, b)`.
    fn xof(rho: &[u8; KYBER_SYMBYTES], a: u8, b: u8) -> Self::Xof;

    /// PRF keyed with `seed` and a one-byte nonce.
    fn prf(seed: &[u8; KYBER_SYMBYTES], nonce: u8) -> Self::Prf;

    /// Derives `out.len()` bytes from `input`.
    ///
    /// Callers must respect [`SymmetricSuite::FIXED_SECRET_BYTES`].
    fn kdf(input: &[u8], out: &mut [u8]);
}

fn digest_parts<D: Digest>(parts: &[&[u8]], out: &mut [u8]) {
    let mut hasher = D::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }
    out.copy_from_slice(&hasher.finalize());
}

/// SHA-3 based suite for the standard instantiations.
pub struct Sha3Suite;

impl SymmetricSuite for Sha3Suite {
    type Xof = ShakeStream<Shake128Reader>;
    type Prf = ShakeStream<Shake256Reader>;

    const FIXED_SECRET_BYTES: Option<usize> = None;

    fn hash_h(parts: &[&[u8]]) -> [u8; KYBER_SYMBYTES] {
        let mut out = [0u8; KYBER_SYMBYTES];
        digest_parts::<Sha3_256>(parts, &mut out);
        out
    }

    fn hash_g(parts: &[&[u8]]) -> [u8; 2 * KYBER_SYMBYTES] {
        let mut out = [0u8; 2 * KYBER_SYMBYTES];
        digest_parts::<Sha3_512>(parts, &mut out);
        out
    }

    fn xof(rho: &[u8; KYBER_SYMBYTES], a: u8, b: u8) -> Self::Xof {
        ShakeStream::shake128(rho, &[a, b])
    }

    fn prf(seed: &[u8; KYBER_SYMBYTES], nonce: u8) -> Self::Prf {
        ShakeStream::shake256(seed, &[nonce])
    }

    fn kdf(input: &[u8], out: &mut [u8]) {
        let mut hasher = Shake256::default();
        Update::update(&mut hasher, input);
        hasher.finalize_xof().read(out);
    }
}

/// SHA-2 and AES-256-CTR suite for the 90s instantiations.
pub struct Aes90sSuite;

impl SymmetricSuite for Aes90sSuite {
    type Xof = AesCtrStream;
    type Prf = AesCtrStream;

    const FIXED_SECRET_BYTES: Option<usize> = Some(32);

    fn hash_h(parts: &[&[u8]]) -> [u8; KYBER_SYMBYTES] {
        let mut out = [0u8; KYBER_SYMBYTES];
        digest_parts::<Sha256>(parts, &mut out);
        out
    }

    fn hash_g(parts: &[&[u8]]) -> [u8; 2 * KYBER_SYMBYTES] {
        let mut out = [0u8; 2 * KYBER_SYMBYTES];
        digest_parts::<Sha512>(parts, &mut out);
        out
    }

    fn xof(rho: &[u8; KYBER_SYMBYTES], a: u8, b: u8) -> Self::Xof {
        AesCtrStream::new(rho, [a, b])
    }

    fn prf(seed: &[u8; KYBER_SYMBYTES], nonce: u8) -> Self::Prf {
        AesCtrStream::new(seed, [nonce, 0])
    }

    fn kdf(input: &[u8], out: &mut [u8]) {
        debug_assert_eq!(out.len(), 32);
        digest_parts::<Sha256>(&[input], out);
    }
}
