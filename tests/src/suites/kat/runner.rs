// tests/src/suites/kat/runner.rs
//! Replays known-answer vectors through a Kyber instantiation.
//!
//! For each record the CTR-DRBG is instantiated with the record's seed and
//! then drives key generation and encapsulation in that order, exactly as
//! the reference KAT generator does.

use crate::suites::kat::error::{KatError, Result};
use crate::suites::kat::model::{KatTarget, KatVector};
use kyber_algorithms::drbg::CtrDrbg;
use kyber_api::{Kem, Serialize, SerializeSecret};
use kyber_kem::kyber::params::{
    Kyber1024Params, Kyber1024_90sParams, Kyber512Params, Kyber512_90sParams, Kyber768Params,
    Kyber768_90sParams,
};
use kyber_kem::kyber::{KyberKem, KyberParams};

fn check(count: u32, field: &'static str, expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(KatError::Mismatch {
        count,
        field,
        expected: hex::encode_upper(expected),
        actual: hex::encode_upper(actual),
    })
}

/// Runs one vector against parameter set `P`
pub fn run_vector<P: KyberParams>(vector: &KatVector) -> Result<()> {
    let count = vector.count;
    let mut drbg = CtrDrbg::new(&vector.seed);

    // 1. Key generation
    let (pk, sk) = KyberKem::<P>::keypair(&mut drbg)?;
    check(count, "pk", &vector.pk, &pk.to_bytes())?;
    check(count, "sk", &vector.sk, &sk.to_bytes_zeroizing())?;

    // 2. Encapsulation continues on the same generator
    let (ct, ss) = KyberKem::<P>::encapsulate(&mut drbg, &pk)?;
    check(count, "ct", &vector.ct, &ct.to_bytes())?;
    check(count, "ss", &vector.ss, ss.as_ref())?;

    // 3. Decapsulation of the recorded ciphertext
    let recorded_ct = KyberKem::<P>::ciphertext_from_bytes(&vector.ct)?;
    let ss_dec = KyberKem::<P>::decapsulate(&sk, &recorded_ct)?;
    check(count, "ss (decapsulated)", &vector.ss, ss_dec.as_ref())?;

    Ok(())
}

/// Runs every vector of a file, stopping at the first failure
pub fn run_vectors<P: KyberParams>(vectors: &[KatVector]) -> Result<usize> {
    for vector in vectors {
        run_vector::<P>(vector)?;
    }
    Ok(vectors.len())
}

/// Dispatches to the instantiation named by `target`
pub fn run_target(target: KatTarget, vectors: &[KatVector]) -> Result<usize> {
    match target {
        KatTarget::Kyber512 => run_vectors::<Kyber512Params>(vectors),
        KatTarget::Kyber768 => run_vectors::<Kyber768Params>(vectors),
        KatTarget::Kyber1024 => run_vectors::<Kyber1024Params>(vectors),
        KatTarget::Kyber512_90s => run_vectors::<Kyber512_90sParams>(vectors),
        KatTarget::Kyber768_90s => run_vectors::<Kyber768_90sParams>(vectors),
        KatTarget::Kyber1024_90s => run_vectors::<Kyber1024_90sParams>(vectors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suites::kat::loader::nist_seeds;

    // Builds a vector from our own output, then checks the runner accepts it
    // and rejects a corrupted copy.
    fn self_vector<P: KyberParams>(count: u32, seed: [u8; 48]) -> KatVector {
        let mut drbg = CtrDrbg::new(&seed);
        let (pk, sk) = KyberKem::<P>::keypair(&mut drbg).unwrap();
        let (ct, ss) = KyberKem::<P>::encapsulate(&mut drbg, &pk).unwrap();
        KatVector {
            count,
            seed,
            pk: pk.to_bytes(),
            sk: sk.to_bytes_zeroizing().to_vec(),
            ct: ct.to_bytes(),
            ss: ss.as_ref().to_vec(),
        }
    }

    #[test]
    fn test_runner_accepts_consistent_vector() {
        let seed = nist_seeds(1)[0];
        let v = self_vector::<Kyber768Params>(0, seed);
        run_vector::<Kyber768Params>(&v).unwrap();
        assert_eq!(run_target(KatTarget::Kyber768, &[v]).unwrap(), 1);
    }

    #[test]
    fn test_runner_reports_first_mismatch() {
        let seed = nist_seeds(1)[0];
        let mut v = self_vector::<Kyber512_90sParams>(4, seed);
        v.ct[0] ^= 1;
        match run_vector::<Kyber512_90sParams>(&v) {
            Err(KatError::Mismatch { count: 4, field: "ct", .. }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_parameter_set_fails() {
        let seed = nist_seeds(1)[0];
        let v = self_vector::<Kyber512Params>(0, seed);
        assert!(run_vector::<Kyber512_90sParams>(&v).is_err());
    }
}
