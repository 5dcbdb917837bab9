// kem/src/kyber/cpa_pke.rs

//! Kyber CPA-secure Public Key Encryption scheme.
//!
//! Every function here is a deterministic function of its explicit seed or
//! coins; randomness is drawn one layer up.

use kyber_algorithms::poly::polyvec::matrix_mul;
use kyber_algorithms::poly::sampling::{expand_matrix, sample_noise};
use kyber_algorithms::poly::{NttPolyVec, Poly, PolyVec};
use zeroize::{Zeroize, Zeroizing};

use super::params::{KyberParams, KYBER_SYMBYTES};
use super::serialize::{pack_ciphertext, unpack_ciphertext};
use super::symmetric::SymmetricSuite;
use crate::error::Result;

/// Public key of the CPA scheme: `t_hat = A s + e` and the matrix seed
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CpaPublicKey {
    pub(crate) t_hat: NttPolyVec,
    pub(crate) rho: [u8; KYBER_SYMBYTES],
}

/// Samples `k` noise polynomials, advancing `nonce` once per polynomial
fn sample_noise_vec<S: SymmetricSuite>(
    seed: &[u8; KYBER_SYMBYTES],
    nonce: &mut u8,
    k: usize,
    eta: usize,
) -> Result<PolyVec> {
    let mut polys = Vec::with_capacity(k);
    for _ in 0..k {
        polys.push(sample_noise(&mut S::prf(seed, *nonce), eta)?);
        *nonce += 1;
    }
    Ok(PolyVec::from_polys(polys))
}

/// Kyber CPA PKE key generation from a 32-byte seed.
///
/// Returns the public key and the secret vector in the NTT domain.
pub(crate) fn keypair_from_seed<P: KyberParams>(
    seed: &[u8; KYBER_SYMBYTES],
) -> Result<(CpaPublicKey, NttPolyVec)> {
    // 1. (rho, sigma) = G(d)
    let g = Zeroizing::new(P::Symmetric::hash_g(&[seed]));
    let mut rho = [0u8; KYBER_SYMBYTES];
    let mut sigma = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    rho.copy_from_slice(&g[..KYBER_SYMBYTES]);
    sigma.copy_from_slice(&g[KYBER_SYMBYTES..]);

    // 2. Expand A; entry [i][j] is read from XOF(rho, j, i)
    let a = expand_matrix(&rho, P::K, false, <P::Symmetric as SymmetricSuite>::xof);

    // 3. Sample s and e, both with eta1
    let mut nonce = 0u8;
    let s = sample_noise_vec::<P::Symmetric>(&sigma, &mut nonce, P::K, P::ETA1)?;
    let e = sample_noise_vec::<P::Symmetric>(&sigma, &mut nonce, P::K, P::ETA1)?;

    // 4. t_hat = A s_hat + e_hat, all in the NTT domain
    let s_hat = s.ntt();
    let mut e_hat = e.ntt();
    let mut t_hat = matrix_mul(&a, &s_hat);
    t_hat.to_mont();
    t_hat.add_assign(&e_hat);
    t_hat.reduce();
    e_hat.zeroize();

    Ok((CpaPublicKey { t_hat, rho }, s_hat))
}

/// Kyber CPA PKE encryption of a 32-byte message under explicit coins.
pub(crate) fn encrypt<P: KyberParams>(
    pk: &CpaPublicKey,
    msg: &[u8; KYBER_SYMBYTES],
    coins: &[u8; KYBER_SYMBYTES],
) -> Result<Vec<u8>> {
    // 1. Expand A^T; entry [i][j] is read from XOF(rho, i, j)
    let a_t = expand_matrix(&pk.rho, P::K, true, <P::Symmetric as SymmetricSuite>::xof);

    // 2. Sample r with eta1, then e1 and e2 with eta2
    let mut nonce = 0u8;
    let mut r_hat = sample_noise_vec::<P::Symmetric>(coins, &mut nonce, P::K, P::ETA1)?.ntt();
    let e1 = sample_noise_vec::<P::Symmetric>(coins, &mut nonce, P::K, P::ETA2)?;
    let e2 = sample_noise(&mut P::Symmetric::prf(coins, nonce), P::ETA2)?;

    // 3. u = A^T r + e1
    let u = matrix_mul(&a_t, &r_hat).inv_ntt().add(&e1);

    // 4. v = t^T r + e2 + m
    let v = pk
        .t_hat
        .pointwise_accumulate(&r_hat)
        .inv_ntt()
        .add(&e2)
        .add(&Poly::from_message(msg));

    r_hat.zeroize();

    // 5. Compress (u, v)
    pack_ciphertext::<P>(&u, &v)
}

/// Kyber CPA PKE decryption.
pub(crate) fn decrypt<P: KyberParams>(
    s_hat: &NttPolyVec,
    ciphertext: &[u8],
) -> Result<Zeroizing<[u8; KYBER_SYMBYTES]>> {
    // 1. Decompress (u, v)
    let (u, v) = unpack_ciphertext::<P>(ciphertext)?;

    // 2. m' = v - s^T u
    let mut su = s_hat.pointwise_accumulate(&u.ntt()).inv_ntt();
    let mut mp = v.sub(&su);
    let msg = Zeroizing::new(mp.to_message());

    su.zeroize();
    mp.zeroize();
    Ok(msg)
}
