// kem/src/kyber/kyber768.rs

//! Kyber-768 KEM (NIST PQC Security Level 3).

use super::kem::KyberKem;
use super::params::{Kyber768Params, Kyber768_90sParams};

/// Kyber-768 KEM, implementing `api::Kem`.
pub type Kyber768 = KyberKem<Kyber768Params>;

/// Kyber-768-90s KEM: SHA-2 and AES-256-CTR in place of SHA-3 and SHAKE.
#[allow(non_camel_case_types)]
pub type Kyber768_90s = KyberKem<Kyber768_90sParams>;
