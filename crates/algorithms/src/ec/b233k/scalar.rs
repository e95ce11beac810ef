//! sect233k1 scalar arithmetic operations

use crate::ec::b233k::constants::B233K_SCALAR_SIZE;
use crate::error::{Error, Result};
use ccrypt_common::security::SecretBuffer;
use ccrypt_internal::constant_time::ct_eq;
use ccrypt_params::B233K;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// sect233k1 scalar value for use in elliptic curve operations
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<B233K_SCALAR_SIZE>);

impl Scalar {
    /// Create a new scalar from raw big-endian bytes.
    ///
    /// The top byte is clamped to its single significant bit (values stay
    /// below 2^233) and the result is reduced modulo the curve order.
    /// Returns an error if the resulting scalar would be zero.
    pub fn new(mut data: [u8; B233K_SCALAR_SIZE]) -> Result<Self> {
        Self::reduce_scalar_bytes(&mut data)?;
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Create a scalar from a `SecretBuffer`.
    ///
    /// The buffer contents will be clamped and reduced modulo the curve order
    /// if necessary. Returns an error if the resulting scalar would be zero.
    pub fn from_secret_buffer(buffer: SecretBuffer<B233K_SCALAR_SIZE>) -> Result<Self> {
        let mut bytes = [0u8; B233K_SCALAR_SIZE];
        bytes.copy_from_slice(buffer.as_ref());
        Self::reduce_scalar_bytes(&mut bytes)?;
        Ok(Scalar(SecretBuffer::new(bytes)))
    }

    /// Get a reference to the underlying `SecretBuffer`.
    pub fn as_secret_buffer(&self) -> &SecretBuffer<B233K_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize this scalar to big-endian bytes.
    pub fn serialize(&self) -> [u8; B233K_SCALAR_SIZE] {
        let mut result = [0u8; B233K_SCALAR_SIZE];
        result.copy_from_slice(self.0.as_ref());
        result
    }

    /// Check if this scalar is zero, in constant time.
    pub fn is_zero(&self) -> bool {
        ct_eq(self.0.as_ref(), [0u8; B233K_SCALAR_SIZE])
    }

    /// Clamp to 233 bits and reduce modulo the group order n.
    ///
    /// n is just above 2^231 (the cofactor is 4), so a clamped value below
    /// 2^233 < 4n needs at most three subtractions of n; all three rounds
    /// always run.
    fn reduce_scalar_bytes(bytes: &mut [u8; B233K_SCALAR_SIZE]) -> Result<()> {
        bytes[0] &= 0x01; // 233 = 29 * 8 + 1: one significant bit in the top byte
        if bytes.iter().all(|&b| b == 0) {
            return Err(Error::param("B233k Scalar", "Scalar cannot be zero"));
        }

        let order = &B233K.order;
        for _ in 0..3 {
            let mut is_ge = false;
            for i in 0..B233K_SCALAR_SIZE {
                if bytes[i] > order[i] {
                    is_ge = true;
                    break;
                }
                if bytes[i] < order[i] {
                    break;
                }
                if i == B233K_SCALAR_SIZE - 1 {
                    is_ge = true;
                }
            }

            if is_ge {
                let mut borrow = 0i16;
                for i in (0..B233K_SCALAR_SIZE).rev() {
                    let diff = (bytes[i] as i16) - (order[i] as i16) - borrow;
                    if diff < 0 {
                        bytes[i] = (diff + 256) as u8;
                        borrow = 1;
                    } else {
                        bytes[i] = diff as u8;
                        borrow = 0;
                    }
                }
            }
        }

        if bytes.iter().all(|&b| b == 0) {
            return Err(Error::param(
                "B233k Scalar",
                "Reduction resulted in zero scalar",
            ));
        }
        Ok(())
    }
}
