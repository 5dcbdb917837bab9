// kem/src/kyber/params.rs

//! Kyber parameter definitions.

use kyber_params::pqc::kyber::{self as global_params, KyberParamSet};

use super::symmetric::{Aes90sSuite, Sha3Suite, SymmetricSuite};

pub use global_params::{KYBER_N, KYBER_SS_BYTES, KYBER_SYMBYTES};

/// Trait defining parameters for a specific Kyber instantiation.
pub trait KyberParams: Send + Sync + 'static {
    /// Security parameter k (dimension of vectors/matrices).
    const K: usize;
    /// Noise parameter eta1 for s, e and r.
    const ETA1: usize;
    /// Noise parameter eta2 for e1 and e2.
    const ETA2: usize;
    /// Compression bits for vector u (part of ciphertext).
    const DU: usize;
    /// Compression bits for polynomial v (part of ciphertext).
    const DV: usize;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the 12-bit encoded secret vector.
    const POLYVEC_BYTES: usize;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the compressed u component.
    const U_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Hashes, keystreams and KDF for this variant.
    type Symmetric: SymmetricSuite;
}

macro_rules! kyber_params {
    ($(#[$doc:meta])* $name:ident, $set:expr, $label:literal, $suite:ty) => {
        $(#[$doc])*
        #[allow(non_camel_case_types)]
        pub struct $name;

        impl KyberParams for $name {
            const K: usize = $set.k;
            const ETA1: usize = $set.eta1;
            const ETA2: usize = $set.eta2;
            const DU: usize = $set.du;
            const DV: usize = $set.dv;
            const NAME: &'static str = $label;
            const POLYVEC_BYTES: usize = $set.polyvec_bytes();
            const PUBLIC_KEY_BYTES: usize = $set.public_key_size();
            const SECRET_KEY_BYTES: usize = $set.secret_key_size();
            const U_BYTES: usize = $set.polyvec_compressed_bytes();
            const CIPHERTEXT_BYTES: usize = $set.ciphertext_size();
            type Symmetric = $suite;
        }
    };
}

const KYBER512: KyberParamSet = global_params::KYBER512;
const KYBER768: KyberParamSet = global_params::KYBER768;
const KYBER1024: KyberParamSet = global_params::KYBER1024;

kyber_params!(
    /// Kyber-512 with SHA-3 and SHAKE.
    Kyber512Params, KYBER512, "Kyber-512", Sha3Suite
);
kyber_params!(
    /// Kyber-768 with SHA-3 and SHAKE.
    Kyber768Params, KYBER768, "Kyber-768", Sha3Suite
);
kyber_params!(
    /// Kyber-1024 with SHA-3 and SHAKE.
    Kyber1024Params, KYBER1024, "Kyber-1024", Sha3Suite
);
kyber_params!(
    /// Kyber-512 with SHA-2 and AES-256-CTR.
    Kyber512_90sParams, KYBER512, "Kyber-512-90s", Aes90sSuite
);
kyber_params!(
    /// Kyber-768 with SHA-2 and AES-256-CTR.
    Kyber768_90sParams, KYBER768, "Kyber-768-90s", Aes90sSuite
);
kyber_params!(
    /// Kyber-1024 with SHA-2 and AES-256-CTR.
    Kyber1024_90sParams, KYBER1024, "Kyber-1024-90s", Aes90sSuite
);
