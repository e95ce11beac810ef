//! sect233k1 elliptic curve point operations

use crate::ec::b233k::{
    constants::{
        B233K_FIELD_ELEMENT_SIZE, B233K_POINT_COMPRESSED_SIZE, B233K_POINT_UNCOMPRESSED_SIZE,
        B233K_SCALAR_BITS, B233K_SCALAR_SIZE,
    },
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use subtle::{Choice, ConditionallySelectable};

/// A point on the sect233k1 elliptic curve
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let self_is_identity: bool = self.is_identity.into();
        let other_is_identity: bool = other.is_identity.into();

        if self_is_identity || other_is_identity {
            return self_is_identity == other_is_identity;
        }

        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Create a new point from uncompressed coordinates.
    ///
    /// Returns an error if the coordinates don't satisfy the curve equation
    /// y² + xy = x³ + 1 (out-of-range coordinates are rejected by
    /// `FieldElement::from_bytes` before the equation is ever evaluated).
    pub fn new_uncompressed(
        x: &[u8; B233K_FIELD_ELEMENT_SIZE],
        y: &[u8; B233K_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x)?;
        let y_fe = FieldElement::from_bytes(y)?;
        if !Self::is_on_curve(&x_fe, &y_fe) {
            return Err(Error::param(
                "B233k Point",
                "Point coordinates do not satisfy curve equation",
            ));
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_fe,
        })
    }

    /// Create the identity point (point at infinity).
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Check that this point is usable: either the identity element or a
    /// point satisfying the curve equation. Subgroup membership is not
    /// checked here; callers clear the cofactor instead.
    pub fn is_valid(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        Self::is_on_curve(&self.x, &self.y)
    }

    /// Get the x-coordinate of this point as bytes.
    pub fn x_coordinate_bytes(&self) -> [u8; B233K_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Get the y-coordinate of this point as bytes.
    pub fn y_coordinate_bytes(&self) -> [u8; B233K_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Serialize this point as x || y, big-endian coordinates.
    ///
    /// The identity point serializes as the all-zero string; (0, y) is never
    /// ambiguous with it because the only curve point with x = 0 is (0, 1).
    pub fn serialize_uncompressed(&self) -> [u8; B233K_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; B233K_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[..B233K_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[B233K_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize a point from the x || y format.
    ///
    /// The all-zero string decodes to the identity point. Anything else must
    /// be a pair of reduced field elements satisfying the curve equation.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "B233k Uncompressed Point",
            bytes.len(),
            B233K_POINT_UNCOMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let mut x_bytes = [0u8; B233K_FIELD_ELEMENT_SIZE];
        let mut y_bytes = [0u8; B233K_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[..B233K_FIELD_ELEMENT_SIZE]);
        y_bytes.copy_from_slice(&bytes[B233K_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&x_bytes, &y_bytes)
    }

    /// Serialize this point in compressed format.
    ///
    /// The compressed format uses the trace of y/x to disambiguate the
    /// y-coordinate.
    pub fn serialize_compressed(&self) -> [u8; B233K_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; B233K_POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        if self.x.is_zero() {
            // (0, 1) is the only curve point with x = 0
            out[0] = 0x02;
            return out;
        }

        let y_tilde = self.x.invert().unwrap().mul(&self.y).trace();
        out[0] = if y_tilde == 1 { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Deserialize a point from compressed format.
    ///
    /// Recovers the y-coordinate from the x-coordinate and the compression
    /// flag. Returns an error if the bytes don't represent a valid point.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "B233k Compressed Point",
            bytes.len(),
            B233K_POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != 0x02 && tag != 0x03 {
            return Err(Error::param("B233k Point", "Invalid compressed point prefix"));
        }
        let mut x_bytes = [0u8; B233K_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..]);
        let x = FieldElement::from_bytes(&x_bytes)?;
        if x.is_zero() {
            return Ok(Point {
                is_identity: Choice::from(0),
                x,
                y: FieldElement::one().sqrt(),
            });
        }

        // y^2 + xy = x^3 + 1. Substituting z = y/x:
        // z^2 + z = x + 1/x^2
        let rhs = x.add(&x.square().invert().unwrap());

        // A solution exists iff the right-hand side has trace zero
        if rhs.trace() != 0 {
            return Err(Error::param("B233k Point", "Cannot decompress point"));
        }

        // Solve z^2 + z = rhs using the half-trace, then pick the root whose
        // trace matches the compression flag (the two roots z and z + 1 have
        // distinct traces since Tr(1) = 1 for odd extension degree)
        let mut z = Self::half_trace(&rhs);
        if z.trace() != (tag as u64 - 2) {
            z = z.add(&FieldElement::one());
        }

        let y = x.mul(&z);
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// Return the half-trace of `a` in GF(2^233).
    ///
    /// For odd m, the half-trace Htr(a) = sum_{i=0}^{(m-1)/2} a^{2^{2i}}
    /// satisfies Htr(a)^2 + Htr(a) = a when Tr(a) = 0.
    fn half_trace(a: &FieldElement) -> FieldElement {
        // m = 233 -> (m-1)/2 = 116
        let mut ht = *a; // a^{2^{0}}
        let mut t = *a;
        for _ in 0..116 {
            t = t.square(); // a^{2^{2k+1}}
            t = t.square(); // a^{2^{2k+2}} = a^{2^{2(k+1)}}
            ht = ht.add(&t); // accumulate a^{2^{2(k+1)}}
        }
        ht
    }

    /// Add two points using the group law for binary elliptic curves.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                // other = -self = (x, x + y): the only negation case
                return Self::identity();
            }
        }

        let lambda = (self.y.add(&other.y)).mul(&(self.x.add(&other.x)).invert().unwrap());
        let x3 = lambda.square().add(&lambda).add(&self.x).add(&other.x);
        let y3 = lambda.mul(&(self.x.add(&x3))).add(&x3).add(&self.y);
        Point {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
        }
    }

    /// Double a point (add it to itself).
    ///
    /// The slope λ = x + y/x is undefined at x = 0, which on this curve is
    /// exactly the 2-torsion point (0, 1); its double is the identity.
    pub fn double(&self) -> Self {
        if self.is_identity() || self.x.is_zero() {
            return Self::identity();
        }

        let lambda = self.x.add(&self.y.mul(&self.x.invert().unwrap()));
        let x2 = lambda.square().add(&lambda);
        let y2 = self.x.square().add(&lambda.mul(&x2)).add(&x2);
        Point {
            is_identity: Choice::from(0),
            x: x2,
            y: y2,
        }
    }

    /// Scalar multiplication: compute scalar * self.
    ///
    /// Left-to-right double-and-add over all 233 scalar bits, most
    /// significant first. Every iteration doubles the accumulator and then
    /// adds an addend selected in constant time between the base point and
    /// the identity sentinel, so the sequence of group operations — and the
    /// iteration count — never depends on the scalar's bit pattern. There is
    /// no early exit.
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        let scalar_bytes = scalar.as_secret_buffer().as_ref();
        let identity = Self::identity();
        let mut acc = Self::identity();

        for i in (0..B233K_SCALAR_BITS).rev() {
            acc = acc.double();
            let byte = scalar_bytes[B233K_SCALAR_SIZE - 1 - i / 8];
            let bit = Choice::from((byte >> (i % 8)) & 1);
            let addend = Self::conditional_select(&identity, self, bit);
            acc = acc.add(&addend);
        }
        Ok(acc)
    }

    /// Constant-time selection between two points.
    pub(crate) fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Point {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, choice),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }

    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        // y^2 + xy = x^3 + 1
        let y_sq = y.square();
        let xy = x.mul(y);
        let lhs = y_sq.add(&xy);

        let x_cubed = x.square().mul(x);
        let rhs = x_cubed.add(&FieldElement::one());

        lhs == rhs
    }
}
