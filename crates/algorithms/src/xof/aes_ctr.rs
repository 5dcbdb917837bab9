// Path: crates/algorithms/src/xof/aes_ctr.rs

//! AES-256-CTR keystream for the 90s instantiations

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use zeroize::Zeroize;

use super::Keystream;

type Aes256Ctr = ctr::Ctr32BE<Aes256>;

/// AES-256 in counter mode, used as both XOF and PRF.
///
/// The 16-byte IV is the two nonce bytes followed by zeros; the trailing 32
/// bits are a big-endian block counter starting at zero.
pub struct AesCtrStream {
    cipher: Aes256Ctr,
}

impl AesCtrStream {
    /// Creates a stream keyed with `key` whose IV begins with `nonce`.
    ///
    /// Matrix expansion passes the two matrix indices; noise sampling passes
    /// `[nonce, 0]`.
    pub fn new(key: &[u8; 32], nonce: [u8; 2]) -> Self {
        let mut iv = [0u8; 16];
        iv[..2].copy_from_slice(&nonce);
        Self {
            cipher: Aes256Ctr::new(&(*key).into(), &iv.into()),
        }
    }
}

impl Keystream for AesCtrStream {
    fn squeeze(&mut self, out: &mut [u8]) {
        // Encrypting zeros yields the raw keystream
        out.zeroize();
        self.cipher.apply_keystream(out);
    }
}
