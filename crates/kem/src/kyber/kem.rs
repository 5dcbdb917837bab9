// kem/src/kyber/kem.rs

//! Kyber key types and the `KyberKem` entry point.

use core::fmt;
use core::marker::PhantomData;

use kyber_api::{Kem, Result as ApiResult, Serialize, SerializeSecret};
use kyber_internal::{ct_eq, ct_is_zero};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::cpa_pke::CpaPublicKey;
use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen};
use super::params::{KyberParams, KYBER_SS_BYTES, KYBER_SYMBYTES};
use super::serialize::{pack_pk, pack_sk, unpack_pk, unpack_sk, SecretKeyParts};
use super::symmetric::SymmetricSuite;
use crate::error::{validate, Error};

/// Kyber public key, typed by parameter set.
pub struct KyberPublicKey<P: KyberParams> {
    inner: CpaPublicKey,
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

impl<P: KyberParams> KyberPublicKey<P> {
    pub(crate) fn from_inner(inner: CpaPublicKey) -> Self {
        let bytes = pack_pk(&inner);
        Self {
            inner,
            bytes,
            _params: PhantomData,
        }
    }

    pub(crate) fn inner(&self) -> &CpaPublicKey {
        &self.inner
    }

    /// Canonical encoding, `encode12(t) || rho`
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: KyberParams> Clone for KyberPublicKey<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: KyberParams> PartialEq for KyberPublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: KyberParams> Eq for KyberPublicKey<P> {}

impl<P: KyberParams> fmt::Debug for KyberPublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KyberPublicKey")
            .field("algorithm", &P::NAME)
            .field("rho", &self.inner.rho)
            .finish_non_exhaustive()
    }
}

impl<P: KyberParams> AsRef<[u8]> for KyberPublicKey<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: KyberParams> Serialize for KyberPublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let inner = unpack_pk::<P>(bytes).map_err(|e| {
            trace!(algorithm = P::NAME, error = %e, "rejected public key encoding");
            e
        })?;
        Ok(Self {
            inner,
            bytes: bytes.to_vec(),
            _params: PhantomData,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Kyber secret key, typed by parameter set.
///
/// Holds the secret vector in the NTT domain, the full public key, the
/// public key hash and the implicit-rejection value `z`. Zeroized on drop.
pub struct KyberSecretKey<P: KyberParams> {
    parts: SecretKeyParts,
    public_key: KyberPublicKey<P>,
}

impl<P: KyberParams> KyberSecretKey<P> {
    pub(crate) fn from_parts(parts: SecretKeyParts) -> Self {
        let public_key = KyberPublicKey::from_inner(parts.public_key.clone());
        Self { parts, public_key }
    }

    pub(crate) fn parts(&self) -> &SecretKeyParts {
        &self.parts
    }

    /// The public key embedded in this secret key
    pub fn public_key(&self) -> &KyberPublicKey<P> {
        &self.public_key
    }
}

impl<P: KyberParams> Zeroize for KyberSecretKey<P> {
    fn zeroize(&mut self) {
        self.parts.s_hat.zeroize();
        self.parts.z.zeroize();
    }
}

impl<P: KyberParams> Drop for KyberSecretKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: KyberParams> ZeroizeOnDrop for KyberSecretKey<P> {}

impl<P: KyberParams> Clone for KyberSecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            parts: self.parts.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

impl<P: KyberParams> PartialEq for KyberSecretKey<P> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&*self.to_bytes_zeroizing(), &*other.to_bytes_zeroizing())
    }
}

impl<P: KyberParams> Eq for KyberSecretKey<P> {}

impl<P: KyberParams> fmt::Debug for KyberSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KyberSecretKey")
            .field("algorithm", &P::NAME)
            .finish_non_exhaustive()
    }
}

impl<P: KyberParams> SerializeSecret for KyberSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let parts = unpack_sk::<P>(bytes).map_err(|e| {
            trace!(algorithm = P::NAME, error = %e, "rejected secret key encoding");
            e
        })?;
        Ok(Self::from_parts(parts))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        pack_sk(
            &self.parts.s_hat,
            self.public_key.as_bytes(),
            &self.parts.h,
            &self.parts.z,
        )
    }
}

/// Kyber ciphertext, typed by parameter set.
pub struct KyberCiphertext<P: KyberParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

impl<P: KyberParams> KyberCiphertext<P> {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// Raw ciphertext bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: KyberParams> Clone for KyberCiphertext<P> {
    fn clone(&self) -> Self {
        Self::from_vec(self.bytes.clone())
    }
}

impl<P: KyberParams> PartialEq for KyberCiphertext<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: KyberParams> Eq for KyberCiphertext<P> {}

impl<P: KyberParams> fmt::Debug for KyberCiphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KyberCiphertext")
            .field("algorithm", &P::NAME)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl<P: KyberParams> AsRef<[u8]> for KyberCiphertext<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: KyberParams> Serialize for KyberCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("ciphertext", bytes.len(), P::CIPHERTEXT_BYTES).map_err(|e| {
            trace!(algorithm = P::NAME, error = %e, "rejected ciphertext");
            e
        })?;
        Ok(Self::from_vec(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Shared secret produced by encapsulation and decapsulation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KyberSharedSecret {
    bytes: Vec<u8>,
}

impl KyberSharedSecret {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a secret produced by this crate
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for KyberSharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for KyberSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for KyberSharedSecret {}

impl fmt::Debug for KyberSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KyberSharedSecret")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl SerializeSecret for KyberSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::secret_length(bytes.len(), None)?;
        Ok(Self::new(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }
}

/// A Kyber keypair. The secret key embeds its own copy of the public key.
pub type KyberKeyPair<P> = (KyberPublicKey<P>, KyberSecretKey<P>);

/// Generic Kyber KEM, instantiated once per parameter set and variant.
pub struct KyberKem<P: KyberParams> {
    _params: PhantomData<P>,
}

impl<P: KyberParams> KyberKem<P> {
    /// Derives a keypair from a 32-byte seed.
    ///
    /// # Determinism contract
    /// - The seed alone fixes the public key and the secret vector.
    /// - The implicit-rejection value `z` is drawn from `rng` (32 bytes, one
    ///   `fill_bytes` call). The secret key encoding is therefore a function
    ///   of `(seed, rng output)`: replay the same generator state to
    ///   reproduce it byte for byte.
    /// - An all-zero seed is rejected with `InvalidSeed`.
    pub fn keypair_from_seed<R: RngCore + CryptoRng>(
        seed: &[u8; KYBER_SYMBYTES],
        rng: &mut R,
    ) -> ApiResult<KyberKeyPair<P>> {
        if bool::from(ct_is_zero(seed)) {
            warn!(algorithm = P::NAME, "rejected all-zero key seed");
            return Err(Error::InvalidSeed {
                context: "keypair_from_seed",
            }
            .into());
        }
        debug!(algorithm = P::NAME, "generating keypair from seed");
        Ok(kem_keygen::<P, R>(seed, rng)?)
    }

    /// Encapsulates a shared secret of `len` bytes.
    ///
    /// The 90s instantiations only support 32-byte secrets.
    pub fn encapsulate_with_len<R: RngCore + CryptoRng>(
        rng: &mut R,
        public_key: &KyberPublicKey<P>,
        len: usize,
    ) -> ApiResult<(KyberCiphertext<P>, KyberSharedSecret)> {
        validate::secret_length(len, <P::Symmetric as SymmetricSuite>::FIXED_SECRET_BYTES)?;
        debug!(algorithm = P::NAME, "encapsulating");
        Ok(kem_encaps::<P, R>(rng, public_key, len)?)
    }

    /// Decapsulates a shared secret of `len` bytes.
    ///
    /// A ciphertext that was not produced for this key still yields a
    /// secret; it just does not match the sender's.
    pub fn decapsulate_with_len(
        secret_key: &KyberSecretKey<P>,
        ciphertext: &KyberCiphertext<P>,
        len: usize,
    ) -> ApiResult<KyberSharedSecret> {
        validate::secret_length(len, <P::Symmetric as SymmetricSuite>::FIXED_SECRET_BYTES)?;
        debug!(algorithm = P::NAME, "decapsulating");
        Ok(kem_decaps::<P>(secret_key, ciphertext, len)?)
    }

    /// Parses a public key
    pub fn public_key_from_bytes(bytes: &[u8]) -> ApiResult<KyberPublicKey<P>> {
        <KyberPublicKey<P> as Serialize>::from_bytes(bytes)
    }

    /// Parses a secret key, verifying the embedded public key hash
    pub fn secret_key_from_bytes(bytes: &[u8]) -> ApiResult<KyberSecretKey<P>> {
        <KyberSecretKey<P> as SerializeSecret>::from_bytes(bytes)
    }

    /// Parses a ciphertext
    pub fn ciphertext_from_bytes(bytes: &[u8]) -> ApiResult<KyberCiphertext<P>> {
        <KyberCiphertext<P> as Serialize>::from_bytes(bytes)
    }

    /// Serializes a keypair. The secret key encoding already contains the
    /// public key, so this is the secret key encoding.
    pub fn keypair_to_bytes(keypair: &KyberKeyPair<P>) -> Zeroizing<Vec<u8>> {
        keypair.1.to_bytes_zeroizing()
    }

    /// Rebuilds a keypair from its secret key encoding
    pub fn keypair_from_bytes(bytes: &[u8]) -> ApiResult<KyberKeyPair<P>> {
        let sk = Self::secret_key_from_bytes(bytes)?;
        Ok((sk.public_key().clone(), sk))
    }
}

impl<P: KyberParams> Kem for KyberKem<P> {
    type PublicKey = KyberPublicKey<P>;
    type SecretKey = KyberSecretKey<P>;
    type SharedSecret = KyberSharedSecret;
    type Ciphertext = KyberCiphertext<P>;
    type KeyPair = KyberKeyPair<P>;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        debug!(algorithm = P::NAME, "generating keypair");
        let mut d = Zeroizing::new([0u8; KYBER_SYMBYTES]);
        rng.fill_bytes(&mut d[..]);
        Ok(kem_keygen::<P, R>(&d, rng)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        Self::encapsulate_with_len(rng, public_key, KYBER_SS_BYTES)
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        Self::decapsulate_with_len(secret_key, ciphertext, KYBER_SS_BYTES)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    impl<P: KyberParams> serde::Serialize for KyberPublicKey<P> {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.bytes)
        }
    }

    impl<'de, P: KyberParams> Deserialize<'de> for KyberPublicKey<P> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            <Self as Serialize>::from_bytes(&bytes).map_err(D::Error::custom)
        }
    }

    impl<P: KyberParams> serde::Serialize for KyberCiphertext<P> {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.bytes)
        }
    }

    impl<'de, P: KyberParams> Deserialize<'de> for KyberCiphertext<P> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            <Self as Serialize>::from_bytes(&bytes).map_err(D::Error::custom)
        }
    }
}
