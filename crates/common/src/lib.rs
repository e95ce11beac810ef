//! Common implementations and shared functionality for the ccrypt library
//!
//! This crate provides the secret-data containers used across the ccrypt
//! components.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecureZeroingType};
