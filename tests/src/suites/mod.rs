//! Test suites
