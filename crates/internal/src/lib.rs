//! Internal utilities for the kyber workspace
//!
//! Not part of the public API surface; used by the arithmetic and protocol
//! crates for secret-dependent comparisons and selections.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;

pub use constant_time::{ct_copy_if, ct_eq, ct_eq_choice, ct_is_zero};
