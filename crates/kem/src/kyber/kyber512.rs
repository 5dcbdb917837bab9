// kem/src/kyber/kyber512.rs

//! Kyber-512 KEM (NIST PQC Security Level 1).

use super::kem::KyberKem;
use super::params::{Kyber512Params, Kyber512_90sParams};

/// Kyber-512 KEM, implementing `api::Kem`.
pub type Kyber512 = KyberKem<Kyber512Params>;

/// Kyber-512-90s KEM: SHA-2 and AES-256-CTR in place of SHA-3 and SHAKE.
#[allow(non_camel_case_types)]
pub type Kyber512_90s = KyberKem<Kyber512_90sParams>;
