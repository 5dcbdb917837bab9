//! Constant values for the kyber workspace
//!
//! This crate holds every fixed number the arithmetic and protocol crates
//! agree on: the ring dimensions, the modulus, and the per-set byte widths.

#![cfg_attr(not(test), no_std)]

pub mod pqc;
