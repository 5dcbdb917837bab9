//! Kyber key encapsulation
//!
//! This crate implements the Kyber KEM at three security levels, each in a
//! standard and a "90s" variant, on top of the arithmetic in
//! `kyber-algorithms`.
//!
//! Operations emit `tracing` events at `debug` level naming the parameter
//! set only; installing a subscriber is left to the application.

pub mod error;
pub mod kyber;

// Re-exports
pub use error::{Error, Result};
pub use kyber::{
    Kyber1024, Kyber1024_90s, Kyber512, Kyber512_90s, Kyber768, Kyber768_90s, KyberCiphertext,
    KyberKem, KyberPublicKey, KyberSecretKey, KyberSharedSecret,
};
