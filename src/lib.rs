//! # ccrypt
//!
//! A modular cryptographic library for resource-constrained calculator
//! platforms, built around a from-scratch binary-field elliptic curve
//! Diffie-Hellman engine.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ccrypt = "0.4"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ccrypt-api`]: Traits (`KeyExchange`, `Serialize`), error types
//! - [`ccrypt-common`]: Secret containers with guaranteed zeroization
//! - [`ccrypt-params`]: Curve parameter constants
//! - [`ccrypt-algorithms`]: The GF(2^233) field/point/scalar engine
//! - [`ccrypt-kex`]: ECDH key agreement over sect233k1
//!
//! ## Example
//!
//! ```
//! use ccrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (alice_pk, alice_sk) = EcdhB233k::keypair(&mut OsRng)?;
//! let (bob_pk, bob_sk) = EcdhB233k::keypair(&mut OsRng)?;
//!
//! let alice_secret = EcdhB233k::shared_secret(&alice_sk, &bob_pk)?;
//! let bob_secret = EcdhB233k::shared_secret(&bob_sk, &alice_pk)?;
//! assert_eq!(alice_secret.as_ref(), bob_secret.as_ref());
//! // Hash or KDF the raw secret before using it as a symmetric key.
//! # Ok::<(), ccrypt::api::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ccrypt_api as api;
pub use ccrypt_common as common;
pub use ccrypt_internal as internal;
pub use ccrypt_params as params;

pub use ccrypt_algorithms as algorithms;
pub use ccrypt_kex as kex;

/// Common imports for ccrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyExchange, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecureZeroingType};

    // Re-export curve parameters
    pub use crate::params::{B233kCurveParams, B233K};

    // Re-export the key agreement scheme
    pub use crate::kex::ecdh::{
        EcdhB233k, EcdhB233kPublicKey, EcdhB233kSecretKey, EcdhB233kSharedSecret,
    };
}
