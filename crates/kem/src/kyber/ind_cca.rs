// kem/src/kyber/ind_cca.rs

//! Kyber IND-CCA2 KEM construction using the Fujisaki-Okamoto transform
//! with implicit rejection.

use kyber_internal::{ct_copy_if, ct_eq_choice};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::cpa_pke::{decrypt, encrypt, keypair_from_seed};
use super::kem::{KyberCiphertext, KyberPublicKey, KyberSecretKey, KyberSharedSecret};
use super::params::{KyberParams, KYBER_SYMBYTES};
use super::serialize::SecretKeyParts;
use super::symmetric::SymmetricSuite;
use crate::error::Result;

/// Derives `len` bytes of shared secret from `K || H(c)`
fn derive_secret<P: KyberParams>(
    k: &[u8],
    h_ct: &[u8; KYBER_SYMBYTES],
    len: usize,
) -> KyberSharedSecret {
    let mut input = Zeroizing::new([0u8; 2 * KYBER_SYMBYTES]);
    input[..KYBER_SYMBYTES].copy_from_slice(k);
    input[KYBER_SYMBYTES..].copy_from_slice(h_ct);

    let mut out = vec![0u8; len];
    P::Symmetric::kdf(&input[..], &mut out);
    KyberSharedSecret::new(out)
}

/// IND-CCA2 key generation from a 32-byte seed `d`.
///
/// `z` is drawn from `rng` after the seed has been consumed.
pub(crate) fn kem_keygen<P: KyberParams, R: RngCore + CryptoRng>(
    d: &[u8; KYBER_SYMBYTES],
    rng: &mut R,
) -> Result<(KyberPublicKey<P>, KyberSecretKey<P>)> {
    // 1. CPA keypair from the seed
    let (cpa_pk, s_hat) = keypair_from_seed::<P>(d)?;

    // 2. h = H(pk)
    let pk = KyberPublicKey::<P>::from_inner(cpa_pk);
    let h = P::Symmetric::hash_h(&[pk.as_bytes()]);

    // 3. Implicit rejection secret
    let mut z = [0u8; KYBER_SYMBYTES];
    rng.fill_bytes(&mut z);

    let sk = KyberSecretKey::from_parts(SecretKeyParts {
        s_hat,
        public_key: pk.inner().clone(),
        h,
        z,
    });
    z.zeroize();
    Ok((pk, sk))
}

/// IND-CCA2 encapsulation producing a `len`-byte shared secret
pub(crate) fn kem_encaps<P: KyberParams, R: RngCore + CryptoRng>(
    rng: &mut R,
    pk: &KyberPublicKey<P>,
    len: usize,
) -> Result<(KyberCiphertext<P>, KyberSharedSecret)> {
    // 1. m = H(random bytes), so raw generator output never leaves the call
    let mut buf = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    rng.fill_bytes(&mut buf[..]);
    let m = Zeroizing::new(P::Symmetric::hash_h(&[&buf[..]]));

    // 2. (K, coins) = G(m || H(pk))
    let h_pk = P::Symmetric::hash_h(&[pk.as_bytes()]);
    let kr = Zeroizing::new(P::Symmetric::hash_g(&[&m[..], &h_pk]));
    let mut coins = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    coins.copy_from_slice(&kr[KYBER_SYMBYTES..]);

    // 3. c = Enc(pk, m, coins)
    let ct = encrypt::<P>(pk.inner(), &m, &coins)?;

    // 4. ss = KDF(K || H(c))
    let h_ct = P::Symmetric::hash_h(&[&ct]);
    let ss = derive_secret::<P>(&kr[..KYBER_SYMBYTES], &h_ct, len);

    Ok((KyberCiphertext::from_vec(ct), ss))
}

/// IND-CCA2 decapsulation producing a `len`-byte shared secret.
///
/// Never fails on a well-formed ciphertext: a mismatch on re-encryption
/// swaps `z` in for `K` without branching.
pub(crate) fn kem_decaps<P: KyberParams>(
    sk: &KyberSecretKey<P>,
    ct: &KyberCiphertext<P>,
    len: usize,
) -> Result<KyberSharedSecret> {
    let parts = sk.parts();
    let ct_bytes = ct.as_bytes();

    // 1. m' = Dec(s, c)
    let m = decrypt::<P>(&parts.s_hat, ct_bytes)?;

    // 2. (K', coins') = G(m' || h)
    let mut kr = Zeroizing::new(P::Symmetric::hash_g(&[&m[..], &parts.h]));
    let mut coins = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    coins.copy_from_slice(&kr[KYBER_SYMBYTES..]);

    // 3. c' = Enc(pk, m', coins')
    let ct_prime = encrypt::<P>(&parts.public_key, &m, &coins)?;

    // 4. Constant-time compare, then overwrite K' with z on mismatch
    let equal = ct_eq_choice(ct_bytes, &ct_prime);
    ct_copy_if(&mut kr[..KYBER_SYMBYTES], &parts.z, !equal);

    // 5. ss = KDF(K' or z || H(c))
    let h_ct = P::Symmetric::hash_h(&[ct_bytes]);
    Ok(derive_secret::<P>(&kr[..KYBER_SYMBYTES], &h_ct, len))
}
