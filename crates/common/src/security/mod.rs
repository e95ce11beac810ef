//! Security primitives for handling sensitive data

pub mod secret;

pub use secret::{SecretBuffer, SecureZeroingType};
