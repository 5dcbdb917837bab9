// kem/src/kyber/kyber1024.rs

//! Kyber-1024 KEM (NIST PQC Security Level 5).

use super::kem::KyberKem;
use super::params::{Kyber1024Params, Kyber1024_90sParams};

/// Kyber-1024 KEM, implementing `api::Kem`.
pub type Kyber1024 = KyberKem<Kyber1024Params>;

/// Kyber-1024-90s KEM: SHA-2 and AES-256-CTR in place of SHA-3 and SHAKE.
#[allow(non_camel_case_types)]
pub type Kyber1024_90s = KyberKem<Kyber1024_90sParams>;
