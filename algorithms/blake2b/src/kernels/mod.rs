//! Kernels
//!
//! The BLAKE2b compression function and the constants it is built from.

pub mod constants;
pub mod portable;
