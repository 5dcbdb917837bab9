//! Testing utilities for the kyber workspace
//!
//! Hosts the known-answer-test harness: a reader for NIST `.rsp` files and a
//! runner that replays each vector through a KEM instantiation using the
//! CTR-DRBG seeded from the file.

pub mod suites;
