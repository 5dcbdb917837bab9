// tests/src/suites/kat/loader.rs
//! Loads NIST `PQCkemKAT` response files.
//!
//! A response file is a sequence of records separated by blank lines, each
//! record a run of `name = HEX` lines starting with `count = N`. Lines
//! beginning with `#` are headers and are skipped.

use crate::suites::kat::error::{KatError, Result};
use crate::suites::kat::model::{KatTarget, KatVector, KAT_SEED_BYTES};
use kyber_algorithms::drbg::CtrDrbg;
use rand::RngCore;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// ----------------------------------------------------------------
/// Directory holding the `.rsp` files. `KYBER_KAT_DIR` overrides the
/// in-tree location.
/// ----------------------------------------------------------------
pub fn kat_dir() -> PathBuf {
    match env::var_os("KYBER_KAT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("vectors")
            .join("kat"),
    }
}

#[derive(Default)]
struct PartialVector {
    count: Option<u32>,
    seed: Option<Vec<u8>>,
    pk: Option<Vec<u8>>,
    sk: Option<Vec<u8>>,
    ct: Option<Vec<u8>>,
    ss: Option<Vec<u8>>,
}

impl PartialVector {
    fn is_empty(&self) -> bool {
        self.count.is_none()
            && self.seed.is_none()
            && self.pk.is_none()
            && self.sk.is_none()
            && self.ct.is_none()
            && self.ss.is_none()
    }

    fn finish(self, line: usize) -> Result<KatVector> {
        let count = self.count.ok_or_else(|| KatError::Parse {
            line,
            reason: "record without a count".into(),
        })?;
        let missing = |field| KatError::MissingField { count, field };

        let seed_bytes = self.seed.ok_or_else(|| missing("seed"))?;
        let seed: [u8; KAT_SEED_BYTES] =
            seed_bytes
                .as_slice()
                .try_into()
                .map_err(|_| KatError::FieldLength {
                    count,
                    field: "seed",
                    expected: KAT_SEED_BYTES,
                    actual: seed_bytes.len(),
                })?;

        Ok(KatVector {
            count,
            seed,
            pk: self.pk.ok_or_else(|| missing("pk"))?,
            sk: self.sk.ok_or_else(|| missing("sk"))?,
            ct: self.ct.ok_or_else(|| missing("ct"))?,
            ss: self.ss.ok_or_else(|| missing("ss"))?,
        })
    }
}

fn decode(field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|source| KatError::Hex { field, source })
}

/// ----------------------------------------------------------------
/// Parses the text of a response file
/// ----------------------------------------------------------------
pub fn parse_rsp(text: &str) -> Result<Vec<KatVector>> {
    let mut vectors = Vec::new();
    let mut current = PartialVector::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            if !current.is_empty() {
                vectors.push(std::mem::take(&mut current).finish(line_no)?);
            }
            continue;
        }

        let (name, value) = line.split_once('=').ok_or_else(|| KatError::Parse {
            line: line_no,
            reason: format!("expected 'name = value', found '{line}'"),
        })?;
        let value = value.trim();

        match name.trim() {
            "count" => {
                if !current.is_empty() {
                    vectors.push(std::mem::take(&mut current).finish(line_no)?);
                }
                let count = value.parse().map_err(|_| KatError::Parse {
                    line: line_no,
                    reason: format!("bad count '{value}'"),
                })?;
                current.count = Some(count);
            }
            "seed" => current.seed = Some(decode("seed", value)?),
            "pk" => current.pk = Some(decode("pk", value)?),
            "sk" => current.sk = Some(decode("sk", value)?),
            "ct" => current.ct = Some(decode("ct", value)?),
            "ss" => current.ss = Some(decode("ss", value)?),
            // Unknown fields are tolerated
            _ => {}
        }
    }

    if !current.is_empty() {
        vectors.push(current.finish(text.lines().count())?);
    }
    Ok(vectors)
}

/// ----------------------------------------------------------------
/// Loads the response file for `target`, or `None` when it is absent
/// ----------------------------------------------------------------
pub fn load_kat_file(target: KatTarget) -> Result<Option<Vec<KatVector>>> {
    let path = kat_dir().join(target.file_name());
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path).map_err(|source| KatError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_rsp(&text).map(Some)
}

/// ----------------------------------------------------------------
/// The per-count seeds of the NIST KAT generator: a CTR-DRBG
/// instantiated with entropy `00 01 .. 2F`, read 48 bytes at a time.
/// ----------------------------------------------------------------
pub fn nist_seeds(n: usize) -> Vec<[u8; KAT_SEED_BYTES]> {
    let mut entropy = [0u8; KAT_SEED_BYTES];
    for (i, b) in entropy.iter_mut().enumerate() {
        *b = i as u8;
    }
    let mut drbg = CtrDrbg::new(&entropy);
    (0..n)
        .map(|_| {
            let mut seed = [0u8; KAT_SEED_BYTES];
            drbg.fill_bytes(&mut seed);
            seed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# kyber512\n\
\n\
count = 0\n\
seed = 061550234D158C5EC95595FE04EF7A25767F2E24CC2BC479D09D86DC9ABCFDE7056A8C266F9EF97ED08541DBD2E1FFA1\n\
pk = 0A0B\n\
sk = 0C0D\n\
ct = 0E0F\n\
ss = 1011\n\
\n\
count = 1\n\
seed = D81C4D8D734FCBFBEADE3D3F8A039FAA2A2C9957E835AD55B22E75BF57BB556AC81ADDE6AEEB4A5A875C3BFCADFA958F\n\
pk = AA\n\
sk = BB\n\
ct = CC\n\
ss = DD\n";

    #[test]
    fn test_parse_two_records() {
        let vectors = parse_rsp(SAMPLE).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].count, 0);
        assert_eq!(vectors[0].pk, vec![0x0a, 0x0b]);
        assert_eq!(vectors[0].ss, vec![0x10, 0x11]);
        assert_eq!(vectors[1].count, 1);
        assert_eq!(vectors[1].ct, vec![0xcc]);
        assert_eq!(&vectors[1].seed[..2], &[0xd8, 0x1c]);
    }

    #[test]
    fn test_missing_field_is_reported() {
        let text = "count = 7\nseed = 00\n";
        match parse_rsp(text) {
            Err(KatError::FieldLength { count: 7, field: "seed", .. }) => {}
            other => panic!("unexpected result: {other:?}"),
        }

        let seed = "00".repeat(KAT_SEED_BYTES);
        let text = format!("count = 3\nseed = {seed}\npk = 00\nsk = 00\nct = 00\n");
        match parse_rsp(&text) {
            Err(KatError::MissingField { count: 3, field: "ss" }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_bad_hex_is_reported() {
        let text = "count = 0\npk = XYZ\n";
        assert!(matches!(
            parse_rsp(text),
            Err(KatError::Hex { field: "pk", .. })
        ));
    }

    #[test]
    fn test_nist_seeds_match_published_file() {
        let seeds = nist_seeds(2);
        let parsed = parse_rsp(SAMPLE).unwrap();
        assert_eq!(seeds[0], parsed[0].seed);
        assert_eq!(seeds[1], parsed[1].seed);
    }
}
