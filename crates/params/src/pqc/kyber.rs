//! Constants for the Kyber key encapsulation mechanism

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: u16 = 3329;

/// Size of hashes, seeds, messages and the implicit-rejection secret
pub const KYBER_SYMBYTES: usize = 32;

/// Default shared secret size, and the only size the 90s variant produces
pub const KYBER_SS_BYTES: usize = 32;

/// Bytes of one polynomial at 12 bits per coefficient
pub const KYBER_POLY_BYTES: usize = 384;

/// Bytes of the 1-bit message encoding
pub const KYBER_MSG_BYTES: usize = KYBER_N / 8;

/// Parameters of one Kyber security level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KyberParamSet {
    /// Rank of the module (number of polynomials per vector)
    pub k: usize,

    /// Noise width for the secret and the encryption vector
    pub eta1: usize,

    /// Noise width for the encryption error terms
    pub eta2: usize,

    /// Compression bits for the `u` component of a ciphertext
    pub du: usize,

    /// Compression bits for the `v` component of a ciphertext
    pub dv: usize,
}

impl KyberParamSet {
    /// Bytes of a 12-bit encoded vector
    pub const fn polyvec_bytes(&self) -> usize {
        self.k * KYBER_POLY_BYTES
    }

    /// Size of public key in bytes
    pub const fn public_key_size(&self) -> usize {
        self.polyvec_bytes() + KYBER_SYMBYTES
    }

    /// Size of secret key in bytes
    pub const fn secret_key_size(&self) -> usize {
        self.polyvec_bytes() + self.public_key_size() + 2 * KYBER_SYMBYTES
    }

    /// Bytes of the compressed `u` vector
    pub const fn polyvec_compressed_bytes(&self) -> usize {
        self.k * KYBER_N * self.du / 8
    }

    /// Bytes of the compressed `v` polynomial
    pub const fn poly_compressed_bytes(&self) -> usize {
        KYBER_N * self.dv / 8
    }

    /// Size of ciphertext in bytes
    pub const fn ciphertext_size(&self) -> usize {
        self.polyvec_compressed_bytes() + self.poly_compressed_bytes()
    }
}

/// Kyber-512 parameters
pub const KYBER512: KyberParamSet = KyberParamSet {
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
};

/// Kyber-768 parameters
pub const KYBER768: KyberParamSet = KyberParamSet {
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
};

/// Kyber-1024 parameters
pub const KYBER1024: KyberParamSet = KyberParamSet {
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
};
