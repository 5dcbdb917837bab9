// Path: crates/algorithms/src/drbg/mod.rs

//! NIST AES-256 CTR-DRBG
//!
//! This is the deterministic generator used by the NIST PQC submission
//! harness (`randombytes_init` / `randombytes`). It exists so that the
//! published known-answer files can be reproduced byte for byte; it has no
//! reseed counter and no prediction resistance, and should not be used as a
//! general purpose RNG.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes256;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the entropy input and personalization string.
pub const SEED_BYTES: usize = 48;

/// AES-256 CTR-DRBG without derivation function.
///
/// Each [`RngCore::fill_bytes`] call corresponds to exactly one
/// `randombytes` call of the reference harness, including the state update
/// that follows it. Splitting a read into two calls therefore produces
/// different bytes than one call of the combined length.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CtrDrbg {
    key: [u8; 32],
    v: [u8; 16],
}

impl CtrDrbg {
    /// Instantiates the generator from a 48-byte entropy input.
    pub fn new(entropy: &[u8; SEED_BYTES]) -> Self {
        Self::with_personalization(entropy, &[0u8; SEED_BYTES])
    }

    /// Instantiates the generator from entropy XORed with a personalization
    /// string.
    pub fn with_personalization(
        entropy: &[u8; SEED_BYTES],
        personalization: &[u8; SEED_BYTES],
    ) -> Self {
        let mut seed_material = [0u8; SEED_BYTES];
        for ((m, e), p) in seed_material
            .iter_mut()
            .zip(entropy.iter())
            .zip(personalization.iter())
        {
            *m = e ^ p;
        }

        let mut drbg = Self {
            key: [0u8; 32],
            v: [0u8; 16],
        };
        drbg.update(Some(&seed_material));
        seed_material.zeroize();
        drbg
    }

    fn increment_v(&mut self) {
        let counter = u128::from_be_bytes(self.v).wrapping_add(1);
        self.v = counter.to_be_bytes();
    }

    fn update(&mut self, provided_data: Option<&[u8; SEED_BYTES]>) {
        let cipher = Aes256::new(&self.key.into());
        let mut temp = [0u8; SEED_BYTES];

        for chunk in temp.chunks_exact_mut(16) {
            self.increment_v();
            let mut block = aes::Block::from(self.v);
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block);
        }

        if let Some(data) = provided_data {
            for (t, d) in temp.iter_mut().zip(data.iter()) {
                *t ^= d;
            }
        }

        self.key.copy_from_slice(&temp[..32]);
        self.v.copy_from_slice(&temp[32..]);
        temp.zeroize();
    }

    fn generate(&mut self, out: &mut [u8]) {
        let cipher = Aes256::new(&self.key.into());

        for chunk in out.chunks_mut(16) {
            self.increment_v();
            let mut block = aes::Block::from(self.v);
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.update(None);
    }
}

impl RngCore for CtrDrbg {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.generate(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.generate(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generate(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.generate(dest);
        Ok(())
    }
}

impl CryptoRng for CtrDrbg {}
