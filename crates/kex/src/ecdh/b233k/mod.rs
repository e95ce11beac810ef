// File: crates/kex/src/ecdh/b233k/mod.rs
//! ECDH over sect233k1 (B-233k)
//!
//! Two-party Elliptic Curve Diffie-Hellman on the SECG binary Koblitz curve
//! sect233k1. Each party holds a 30-byte private scalar and a 60-byte public
//! key (the x and y coordinates of its point, big-endian, concatenated). The
//! shared secret is the 60-byte encoding of the agreed point after cofactor
//! clearing; it must be passed through a hash or KDF before use as a
//! symmetric key.
//!
//! Peer public keys are validated before any secret-dependent computation:
//! the point at infinity and off-curve or out-of-range coordinates are
//! rejected outright, and inputs whose entire contribution lies in the
//! cofactor subgroup are rejected after cofactor clearing.

use crate::error::{validate, Error as KexError};
use ccrypt_algorithms::ec::b233k as ec_b233k;
use ccrypt_api::{
    error::Error as ApiError, traits::serialize::{Serialize, SerializeSecret}, KeyExchange,
    Result as ApiResult,
};
use ccrypt_common::security::SecretBuffer;
use ccrypt_params::B233K;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Size of a serialized public key: x || y
pub const B233K_PUBLIC_KEY_SIZE: usize = ec_b233k::B233K_POINT_UNCOMPRESSED_SIZE;

/// Size of a serialized secret key (the private scalar)
pub const B233K_SECRET_KEY_SIZE: usize = ec_b233k::B233K_SCALAR_SIZE;

/// Size of the raw shared secret: x || y of the agreed point
pub const B233K_SHARED_SECRET_SIZE: usize = ec_b233k::B233K_POINT_UNCOMPRESSED_SIZE;

/// ECDH key agreement with the sect233k1 curve
pub struct EcdhB233k;

/// Public key for ECDH-B233k (uncompressed EC point, x || y)
#[derive(Clone, Zeroize)]
pub struct EcdhB233kPublicKey([u8; B233K_PUBLIC_KEY_SIZE]);

/// Secret key for ECDH-B233k (scalar value)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcdhB233kSecretKey(SecretBuffer<B233K_SECRET_KEY_SIZE>);

/// Raw shared secret from ECDH-B233k; hash or KDF before use
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcdhB233kSharedSecret(SecretBuffer<B233K_SHARED_SECRET_SIZE>);

// AsRef/AsMut implementations
impl AsRef<[u8]> for EcdhB233kPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl AsMut<[u8]> for EcdhB233kPublicKey {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}
impl AsRef<[u8]> for EcdhB233kSecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
impl AsMut<[u8]> for EcdhB233kSecretKey {
    fn as_mut(&mut self) -> &mut [u8] {
        self.0.as_mut()
    }
}
impl AsRef<[u8]> for EcdhB233kSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
impl AsMut<[u8]> for EcdhB233kSharedSecret {
    fn as_mut(&mut self) -> &mut [u8] {
        self.0.as_mut()
    }
}

impl Serialize for EcdhB233kPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        ccrypt_api::error::validate::length("ECDH-B233k public key", bytes.len(), B233K_PUBLIC_KEY_SIZE)?;
        let mut data = [0u8; B233K_PUBLIC_KEY_SIZE];
        data.copy_from_slice(bytes);
        Ok(EcdhB233kPublicKey(data))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl SerializeSecret for EcdhB233kSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        ccrypt_api::error::validate::length("ECDH-B233k secret key", bytes.len(), B233K_SECRET_KEY_SIZE)?;
        let mut data = [0u8; B233K_SECRET_KEY_SIZE];
        data.copy_from_slice(bytes);
        Ok(EcdhB233kSecretKey(SecretBuffer::new(data)))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

impl SerializeSecret for EcdhB233kSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        ccrypt_api::error::validate::length(
            "ECDH-B233k shared secret",
            bytes.len(),
            B233K_SHARED_SECRET_SIZE,
        )?;
        let mut data = [0u8; B233K_SHARED_SECRET_SIZE];
        data.copy_from_slice(bytes);
        Ok(EcdhB233kSharedSecret(SecretBuffer::new(data)))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

/// Decode and validate a peer public key.
///
/// Rejects the all-zero (infinity) encoding and anything that is not a pair
/// of reduced coordinates on the curve.
fn decode_peer_public_key(bytes: &[u8; B233K_PUBLIC_KEY_SIZE]) -> crate::error::Result<ec_b233k::Point> {
    validate::remote_public_key(
        !bytes.iter().all(|&b| b == 0),
        "ECDH-B233k",
        "peer public key is the point at infinity",
    )?;

    let point = ec_b233k::Point::deserialize_uncompressed(bytes).map_err(|_| {
        KexError::RemotePublicKeyInvalid {
            algorithm: "ECDH-B233k",
            reason: "peer public key is not a valid curve point",
        }
    })?;
    Ok(point)
}

impl KeyExchange for EcdhB233k {
    type PublicKey = EcdhB233kPublicKey;
    type SecretKey = EcdhB233kSecretKey;
    type SharedSecret = EcdhB233kSharedSecret;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDH-B233k"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (sk_scalar, pk_point) = ec_b233k::generate_keypair(&B233K, rng)
            .map_err(|e| ApiError::from(KexError::from(e)))?;

        let public_key = EcdhB233kPublicKey(pk_point.serialize_uncompressed());
        let secret_key = EcdhB233kSecretKey(sk_scalar.as_secret_buffer().clone());

        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        let scalar = ec_b233k::Scalar::from_secret_buffer(secret_key.0.clone()).map_err(|_| {
            ApiError::from(KexError::PrivateKeyInvalid {
                algorithm: "ECDH-B233k",
                reason: "scalar is zero after reduction",
            })
        })?;

        let peer_point = decode_peer_public_key(&peer_public_key.0).map_err(ApiError::from)?;

        let shared_point = ec_b233k::scalar_mult(&scalar, &peer_point)
            .map_err(|e| ApiError::from(KexError::from(e)))?;

        // Multiply by the cofactor h = 4. A peer key whose useful content is
        // confined to the small subgroup collapses to the identity here and
        // is rejected rather than producing a predictable secret.
        let shared_point = ec_b233k::clear_cofactor(&B233K, &shared_point);
        if shared_point.is_identity() {
            return Err(ApiError::from(KexError::RemotePublicKeyInvalid {
                algorithm: "ECDH-B233k",
                reason: "peer public key lies in a small subgroup",
            }));
        }

        let mut secret = [0u8; B233K_SHARED_SECRET_SIZE];
        secret.copy_from_slice(&shared_point.serialize_uncompressed());
        Ok(EcdhB233kSharedSecret(SecretBuffer::new(secret)))
    }
}
