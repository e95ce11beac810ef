//! Cryptographic primitives for the ccrypt library
//!
//! This crate houses the arithmetic engines behind ccrypt's public-key
//! functionality. The only engine currently built for the calculator targets
//! is the binary-field elliptic curve module [`ec`]; the symmetric and hash
//! primitives ship with the platform ROM and are consumed through their own
//! interfaces.
//!
//! Everything here is synchronous, allocation-free and caller-owned: an
//! operation runs to completion on the caller's stack and the crate holds no
//! mutable global state.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;

#[cfg(feature = "ec")]
pub mod ec;
