//! Koblitz sect233k1 Elliptic Curve Primitives
//!
//! This module implements the sect233k1 (NIST K-233) binary elliptic curve.
//! The curve equation is y² + xy = x³ + 1 over the binary field GF(2^233).
//! - Field polynomial: x^233 + x^74 + 1
//! - The curve order n = 0x8000000000000000000000000000069D5BB915BCD46EFB1AD5F173ABDF
//! - Cofactor h = 4
//!
//! Operations are designed to be constant-time. The curve constants are not
//! baked into the engine: every entry point takes a [`B233kCurveParams`]
//! reference, normally [`B233K`], so tests can substitute alternate generator
//! values.
//!
//! All byte-level inputs and outputs — generator constants, scalars and
//! coordinates — are big-endian; the conversion into the little-endian limb
//! representation happens in exactly one place
//! (`FieldElement::{from_bytes,to_bytes}`).

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    B233K_FIELD_ELEMENT_SIZE, B233K_POINT_COMPRESSED_SIZE, B233K_POINT_UNCOMPRESSED_SIZE,
    B233K_SCALAR_BITS, B233K_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};

// Curve parameters live in the params crate; re-exported here so callers of
// this module rarely need a second import.
pub use ccrypt_params::{B233kCurveParams, B233K};

/// Build the generator point of the given parameter set.
///
/// The stored big-endian coordinates go through the same validated
/// deserialization path as any remote point.
pub fn base_point(curve: &B233kCurveParams) -> Result<Point> {
    Point::new_uncompressed(&curve.g_x, &curve.g_y)
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base(curve: &B233kCurveParams, scalar: &Scalar) -> Result<Point> {
    let g = base_point(curve)?;
    g.mul(scalar)
}

/// Generate a cryptographically secure ECDH keypair.
///
/// A failure of the randomness source is a hard error; there is no fallback.
/// The loop only repeats in the negligible case that the candidate bytes
/// clamp and reduce to zero.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    curve: &B233kCurveParams,
    rng: &mut R,
) -> Result<(Scalar, Point)> {
    let mut scalar_bytes = [0u8; B233K_SCALAR_SIZE];
    loop {
        rng.try_fill_bytes(&mut scalar_bytes).map_err(|_| Error::Processing {
            operation: "B233k keypair generation",
            details: "randomness source failed",
        })?;
        match Scalar::new(scalar_bytes) {
            Ok(private_key) => {
                let public_key = scalar_mult_base(curve, &private_key)?;
                return Ok((private_key, public_key));
            }
            Err(_) => continue,
        }
    }
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    if point.is_identity() {
        return Ok(Point::identity());
    }
    point.mul(scalar)
}

/// Multiply a point by the curve cofactor h = 2^cofactor_log2.
///
/// Clears any small-subgroup component of a computed point: for every point
/// of order dividing h the result is the identity, which callers treat as a
/// rejected input.
pub fn clear_cofactor(curve: &B233kCurveParams, point: &Point) -> Point {
    let mut result = point.clone();
    for _ in 0..curve.cofactor_log2 {
        result = result.double();
    }
    result
}

#[cfg(test)]
mod tests;
