// File: crates/api/src/traits/kex.rs

//! Trait definition for two-party key agreement with enhanced type safety
//!
//! This module provides a type-safe interface for Diffie-Hellman style key
//! exchange, in which both parties hold a static or ephemeral key pair and
//! derive the same shared secret from their own secret key and the peer's
//! public key.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for two-party key agreement with domain-specific types.
///
/// # Security Design
///
/// This trait enforces strong type safety and clear contracts for
/// serialization, preventing common security vulnerabilities.
pub trait KeyExchange {
    /// Public key type with appropriate constraints.
    ///
    /// # Security Note
    /// Implements `Serialize` to guarantee safe `from_bytes` and `to_bytes` methods.
    type PublicKey: Clone + Serialize;

    /// Secret key type with security guarantees.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret` to guarantee safe `from_bytes` and
    ///   `to_bytes_zeroizing` methods.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type with security guarantees.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Must be passed through a hash or KDF before use as key material;
    ///   implementations return the raw agreement output.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Keypair type for efficient storage of related keys. It is an
    /// intermediate type and does not require a serialization contract itself.
    type KeyPair: Clone;

    /// Returns the key-exchange algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    /// - A failure of the randomness source must surface as an error, never
    ///   as a silently weaker key.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    ///
    /// # Security Note
    /// The returned secret key should be protected and zeroized after use.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Compute the shared secret from our secret key and the peer's public key.
    ///
    /// # Security Requirements
    /// - Must validate the peer public key before any secret-dependent
    ///   computation.
    /// - Must be resistant to side-channel attacks.
    /// - Must not leak information about the secret key on failure.
    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
