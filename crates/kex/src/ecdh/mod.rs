// File: crates/kex/src/ecdh/mod.rs
//! ECDH key agreement implementations
//!
//! This module provides constant-time Elliptic Curve Diffie-Hellman for the
//! binary Koblitz curve sect233k1. The shared secret returned by these
//! implementations is the raw point encoding; callers are expected to derive
//! working keys from it with a hash or KDF of their choosing.

pub mod b233k;

// Re-export the B233k types
pub use b233k::{
    EcdhB233k, EcdhB233kPublicKey, EcdhB233kSecretKey, EcdhB233kSharedSecret,
};
