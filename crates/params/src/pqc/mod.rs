//! Post-quantum parameter sets

pub mod kyber;
