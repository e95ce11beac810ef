//! Constant values for the ccrypt library
//!
//! This crate collects the fixed, process-wide, read-only parameters the
//! engine crates consume: curve constants and wire-format sizes. It has no
//! dependencies and is always `no_std`.

#![no_std]

pub mod traditional;

// Re-export the ECDH parameter types at the crate root for convenience
pub use traditional::ecdh::{B233kCurveParams, B233K};
