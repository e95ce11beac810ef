//! Key exchange protocols for the ccrypt library
//!
//! This crate implements the two-party key agreement protocols shipped with
//! ccrypt. The only scheme built for the calculator targets is ECDH over the
//! binary Koblitz curve sect233k1; its raw shared secret must be passed
//! through a hash or KDF by the caller before use as key material.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod ecdh;
pub mod error;

// Re-exports
pub use ecdh::EcdhB233k;
