//! Public API traits and types for the ccrypt library
//!
//! This crate provides the public API surface shared by the ccrypt ecosystem:
//! trait definitions, error types, and validation helpers used throughout the
//! library.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{KeyExchange, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kex, serialize};
