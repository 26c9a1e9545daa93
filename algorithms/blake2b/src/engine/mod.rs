//! Execution Engine
//!
//! Parameter validation and the one-time startup self-test.

pub mod params;
pub mod selftest;
