// Path: crates/algorithms/src/xof/shake.rs

//! SHAKE-backed keystreams (FIPS 202)

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader, Shake256, Shake256Reader};

use super::Keystream;

/// A keystream reading from an absorbed SHAKE instance.
pub struct ShakeStream<R: XofReader> {
    reader: R,
}

impl ShakeStream<Shake128Reader> {
    /// Absorbs `seed ‖ suffix` into SHAKE128 and returns the squeezing stream.
    ///
    /// Matrix expansion uses this with the 32-byte public seed and the two
    /// index bytes as suffix.
    pub fn shake128(seed: &[u8], suffix: &[u8]) -> Self {
        let mut hasher = Shake128::default();
        Update::update(&mut hasher, seed);
        Update::update(&mut hasher, suffix);
        Self {
            reader: hasher.finalize_xof(),
        }
    }
}

impl ShakeStream<Shake256Reader> {
    /// Absorbs `seed ‖ suffix` into SHAKE256 and returns the squeezing stream.
    ///
    /// Noise sampling uses this with the 32-byte noise seed and a one-byte
    /// nonce as suffix.
    pub fn shake256(seed: &[u8], suffix: &[u8]) -> Self {
        let mut hasher = Shake256::default();
        Update::update(&mut hasher, seed);
        Update::update(&mut hasher, suffix);
        Self {
            reader: hasher.finalize_xof(),
        }
    }
}

impl<R: XofReader> Keystream for ShakeStream<R> {
    fn squeeze(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}
