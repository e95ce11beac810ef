//! Validation utilities for key exchange operations

use super::{Error, Result};

/// Validate key pair generation parameters
pub fn key_generation(
    condition: bool,
    algorithm: &'static str,
    details: &'static str,
) -> Result<()> {
    if !condition {
        return Err(Error::KeyGeneration { algorithm, details });
    }
    Ok(())
}

/// Validate a caller-supplied argument
pub fn argument(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidArgument { context, details });
    }
    Ok(())
}

/// Validate a peer public key
pub fn remote_public_key(
    condition: bool,
    algorithm: &'static str,
    reason: &'static str,
) -> Result<()> {
    if !condition {
        return Err(Error::RemotePublicKeyInvalid { algorithm, reason });
    }
    Ok(())
}

// Re-export primitive validations for convenience
pub use ccrypt_api::error::validate::{length, min_length, parameter};
