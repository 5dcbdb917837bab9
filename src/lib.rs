//! # kyber
//!
//! Round-3 Kyber key encapsulation in pure Rust.
//!
//! ## Usage
//!
//! ```no_run
//! use kyber::api::Kem;
//! use kyber::kem::Kyber768;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = Kyber768::keypair(&mut OsRng).unwrap();
//! let (ct, ss_sender) = Kyber768::encapsulate(&mut OsRng, &pk).unwrap();
//! let ss_receiver = Kyber768::decapsulate(&sk, &ct).unwrap();
//! assert_eq!(ss_sender.as_ref(), ss_receiver.as_ref());
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kyber-api`]: error type and the `Kem` / serialization traits
//! - [`kyber-params`]: fixed constants and per-set byte widths
//! - [`kyber-algorithms`]: ring arithmetic, NTT, sampling, codecs, keystreams, CTR-DRBG
//! - [`kyber-kem`]: the six Kyber instantiations
//!
//! ## Features
//!
//! - `std` (default): enables `rand::rngs::OsRng`
//! - `serde`: byte-string serde support for public keys and ciphertexts

pub use kyber_algorithms as algorithms;
pub use kyber_api as api;
pub use kyber_internal as internal;
pub use kyber_kem as kem;
pub use kyber_params as params;

/// Prelude module for convenient imports
pub mod prelude {
    pub use kyber_api::{Error, Kem, Result, Serialize, SerializeSecret};
    pub use kyber_algorithms::drbg::CtrDrbg;
    pub use kyber_kem::{
        Kyber1024, Kyber1024_90s, Kyber512, Kyber512_90s, Kyber768, Kyber768_90s,
    };
    #[cfg(feature = "std")]
    pub use rand::rngs::OsRng;
}
