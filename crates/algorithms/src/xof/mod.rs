// Path: crates/algorithms/src/xof/mod.rs

//! Keystream backends for matrix expansion and noise sampling
//!
//! Kyber draws every pseudorandom byte it needs from one of two stream
//! families: SHAKE for the standard instantiations and AES-256 in counter
//! mode for the "90s" instantiations. Both are exposed through the
//! [`Keystream`] trait so the sampling code never needs to know which one it
//! is reading from.

pub mod aes_ctr;
pub mod shake;

pub use aes_ctr::AesCtrStream;
pub use shake::ShakeStream;

/// A source of pseudorandom bytes that can be read incrementally.
///
/// Successive calls continue the same stream: squeezing 100 bytes and then
/// 68 more yields exactly the first 168 bytes of the stream.
pub trait Keystream {
    /// Fills `out` with the next `out.len()` bytes of the stream.
    fn squeeze(&mut self, out: &mut [u8]);
}

impl<S: Keystream + ?Sized> Keystream for &mut S {
    fn squeeze(&mut self, out: &mut [u8]) {
        (**self).squeeze(out)
    }
}
