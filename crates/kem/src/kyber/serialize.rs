// kem/src/kyber/serialize.rs

//! Byte layouts for Kyber keys and ciphertexts.
//!
//! - public key: `encode12(t_hat) || rho`
//! - secret key: `encode12(s_hat) || public key || H(public key) || z`
//! - ciphertext: `compress_du(u) || compress_dv(v)`

use kyber_algorithms::poly::serialize::{compress, decompress, packed_bytes};
use kyber_algorithms::poly::{NttPolyVec, Poly, PolyVec};
use kyber_internal::ct_eq;
use zeroize::Zeroizing;

use super::cpa_pke::CpaPublicKey;
use super::params::{KyberParams, KYBER_SYMBYTES};
use super::symmetric::SymmetricSuite;
use crate::error::{validate, Error, Result};

/// Parsed secret key fields
#[derive(Clone)]
pub(crate) struct SecretKeyParts {
    pub(crate) s_hat: NttPolyVec,
    pub(crate) public_key: CpaPublicKey,
    pub(crate) h: [u8; KYBER_SYMBYTES],
    pub(crate) z: [u8; KYBER_SYMBYTES],
}

fn read_symbytes(bytes: &[u8]) -> [u8; KYBER_SYMBYTES] {
    let mut out = [0u8; KYBER_SYMBYTES];
    out.copy_from_slice(&bytes[..KYBER_SYMBYTES]);
    out
}

/// Serialize a CPA public key
pub(crate) fn pack_pk(pk: &CpaPublicKey) -> Vec<u8> {
    let mut out = pk.t_hat.to_bytes();
    out.extend_from_slice(&pk.rho);
    out
}

/// Parse a CPA public key
pub(crate) fn unpack_pk<P: KyberParams>(bytes: &[u8]) -> Result<CpaPublicKey> {
    validate::length("public key", bytes.len(), P::PUBLIC_KEY_BYTES)?;
    let (poly_bytes, rho) = bytes.split_at(P::POLYVEC_BYTES);
    Ok(CpaPublicKey {
        t_hat: NttPolyVec::from_bytes(poly_bytes, P::K)?,
        rho: read_symbytes(rho),
    })
}

/// Serialize a full secret key
pub(crate) fn pack_sk(
    s_hat: &NttPolyVec,
    pk_bytes: &[u8],
    h: &[u8; KYBER_SYMBYTES],
    z: &[u8; KYBER_SYMBYTES],
) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(s_hat.to_bytes());
    out.extend_from_slice(pk_bytes);
    out.extend_from_slice(h);
    out.extend_from_slice(z);
    out
}

/// Parse a full secret key, checking the embedded public key against its
/// stored hash.
pub(crate) fn unpack_sk<P: KyberParams>(bytes: &[u8]) -> Result<SecretKeyParts> {
    validate::length("secret key", bytes.len(), P::SECRET_KEY_BYTES)?;

    let (s_bytes, rest) = bytes.split_at(P::POLYVEC_BYTES);
    let (pk_bytes, rest) = rest.split_at(P::PUBLIC_KEY_BYTES);
    let (h, z) = rest.split_at(KYBER_SYMBYTES);

    let h = read_symbytes(h);
    if !ct_eq(P::Symmetric::hash_h(&[pk_bytes]), h) {
        return Err(Error::KeyMismatch {
            context: "secret key",
        });
    }

    Ok(SecretKeyParts {
        s_hat: NttPolyVec::from_bytes(s_bytes, P::K)?,
        public_key: unpack_pk::<P>(pk_bytes)?,
        h,
        z: read_symbytes(z),
    })
}

/// Compress and concatenate the two ciphertext components
pub(crate) fn pack_ciphertext<P: KyberParams>(u: &PolyVec, v: &Poly) -> Result<Vec<u8>> {
    let mut out = u.compress(P::DU)?;
    let start = out.len();
    out.resize(start + packed_bytes(P::DV), 0);
    compress(v, P::DV, &mut out[start..])?;
    Ok(out)
}

/// Split and decompress a ciphertext
pub(crate) fn unpack_ciphertext<P: KyberParams>(bytes: &[u8]) -> Result<(PolyVec, Poly)> {
    validate::length("ciphertext", bytes.len(), P::CIPHERTEXT_BYTES)?;
    let (u_bytes, v_bytes) = bytes.split_at(P::U_BYTES);
    Ok((
        PolyVec::decompress(u_bytes, P::K, P::DU)?,
        decompress(v_bytes, P::DV)?,
    ))
}
