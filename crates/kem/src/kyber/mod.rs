// kem/src/kyber/mod.rs

//! Kyber Key Encapsulation Mechanism (KEM).
//!
//! This module implements the round-3 Kyber KEM, a lattice-based key
//! encapsulation mechanism providing IND-CCA2 security. Each security level
//! comes in a standard (SHA-3) and a "90s" (SHA-2/AES) variant.

// Modules defining the Kyber KEM logic and parameters.
mod cpa_pke; // Defines the core CPA-secure PKE scheme
mod ind_cca; // Implements the Fujisaki-Okamoto transform for CCA security
mod kem; // Defines the key types and implements api::Kem
pub mod params;
mod serialize; // Byte layouts for keys and ciphertexts
pub mod symmetric;

// Concrete Kyber variants
mod kyber1024;
mod kyber512;
mod kyber768;

// Re-export the primary KEM types for each security level.
pub use self::kyber1024::{Kyber1024, Kyber1024_90s};
pub use self::kyber512::{Kyber512, Kyber512_90s};
pub use self::kyber768::{Kyber768, Kyber768_90s};

// Re-export the generic machinery for callers naming types directly.
pub use self::kem::{
    KyberCiphertext, KyberKem, KyberKeyPair, KyberPublicKey, KyberSecretKey, KyberSharedSecret,
};
pub use self::params::{KyberParams, KYBER_SS_BYTES};
