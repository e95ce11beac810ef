//! sect233k1 field arithmetic: GF(2^233)
//!
//! Elements are polynomials over GF(2) reduced modulo x^233 + x^74 + 1,
//! stored as 4 little-endian 64-bit limbs (233 significant bits in a 256-bit
//! container, which also absorbs the spill of an unreduced product). The wire
//! representation is a 30-byte big-endian string; `from_bytes`/`to_bytes` are
//! the only places where the two byte orders meet.
//!
//! Addition is XOR. Multiplication and squaring run a fixed number of word
//! operations regardless of operand values; inversion uses a fixed
//! Itoh-Tsujii addition chain. Only `degree` and the equality predicates are
//! variable-time, and those are reserved for validation of public data.

use crate::ec::b233k::constants::B233K_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable};

/// Number of 64-bit limbs in a field element
const LIMBS: usize = 4;

/// Mask of the valid bits of the top limb (degrees 192..=232)
const TOP_MASK: u64 = (1 << 41) - 1;

/// sect233k1 field element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u64; LIMBS]);

impl FieldElement {
    /// The additive identity element: 0
    pub fn zero() -> Self {
        FieldElement([0, 0, 0, 0])
    }

    /// The multiplicative identity element: 1
    pub fn one() -> Self {
        FieldElement([1, 0, 0, 0])
    }

    /// Create a field element from its big-endian byte representation.
    ///
    /// Returns an error if the encoded polynomial has degree 233 or higher,
    /// i.e. is not reduced.
    pub fn from_bytes(bytes: &[u8; B233K_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let mut limbs = [0u64; LIMBS];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }
        if limbs[LIMBS - 1] & !TOP_MASK != 0 {
            return Err(Error::param(
                "B233k FieldElement",
                "Encoded value has degree 233 or higher",
            ));
        }
        Ok(FieldElement(limbs))
    }

    /// Convert this field element to its big-endian byte representation.
    pub fn to_bytes(&self) -> [u8; B233K_FIELD_ELEMENT_SIZE] {
        let mut bytes = [0u8; B233K_FIELD_ELEMENT_SIZE];
        for i in 0..B233K_FIELD_ELEMENT_SIZE {
            bytes[B233K_FIELD_ELEMENT_SIZE - 1 - i] = (self.0[i / 8] >> (8 * (i % 8))) as u8;
        }
        bytes
    }

    /// Field addition: bitwise XOR. Characteristic 2, so there are no
    /// carries and every element is its own additive inverse.
    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        FieldElement([
            self.0[0] ^ other.0[0],
            self.0[1] ^ other.0[1],
            self.0[2] ^ other.0[2],
            self.0[3] ^ other.0[3],
        ])
    }

    /// Check if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Degree of the polynomial, i.e. the index of the highest set bit.
    /// Returns `None` for the zero element.
    ///
    /// Variable-time; used only to validate public wire data, never on
    /// secret-derived values.
    pub fn degree(&self) -> Option<u32> {
        for i in (0..LIMBS).rev() {
            if self.0[i] != 0 {
                return Some(64 * i as u32 + 63 - self.0[i].leading_zeros());
            }
        }
        None
    }

    /// Field multiplication.
    ///
    /// Carry-less shift-and-XOR product of the two 233-bit polynomials into a
    /// 466-bit intermediate, followed by reduction. Every bit of `self` is
    /// processed through the same masked XOR, so the work done is independent
    /// of the operand values.
    pub fn mul(&self, other: &Self) -> Self {
        let mut wide = [0u64; 2 * LIMBS];
        for i in 0..LIMBS {
            // `shifted` tracks other << (64*i + bit) limb-aligned to wide[i..]
            let mut shifted = [other.0[0], other.0[1], other.0[2], other.0[3], 0u64];
            let word = self.0[i];
            for bit in 0..64 {
                let mask = ((word >> bit) & 1).wrapping_neg();
                for k in 0..5 {
                    wide[i + k] ^= shifted[k] & mask;
                }
                let mut carry = 0u64;
                for limb in shifted.iter_mut() {
                    let next = *limb >> 63;
                    *limb = (*limb << 1) | carry;
                    carry = next;
                }
            }
        }
        FieldElement(Self::reduce(wide))
    }

    /// Field squaring.
    ///
    /// In characteristic 2 squaring is linear: interleave a zero bit after
    /// every bit of the operand, then reduce. Considerably cheaper than a
    /// general multiplication, which matters because doubling, inversion,
    /// trace and square root are all squaring-dominated.
    pub fn square(&self) -> Self {
        let mut wide = [0u64; 2 * LIMBS];
        for i in 0..LIMBS {
            wide[2 * i] = Self::spread(self.0[i] as u32);
            wide[2 * i + 1] = Self::spread((self.0[i] >> 32) as u32);
        }
        FieldElement(Self::reduce(wide))
    }

    /// Multiplicative inverse.
    ///
    /// Computes a^(2^233 - 2) with the Itoh-Tsujii addition chain
    /// 1, 2, 3, 6, 7, 14, 28, 29, 58, 116, 232: ten multiplications and a
    /// fixed ladder of squarings. Zero has no inverse and is rejected; the
    /// group-law code only ever inverts values it has checked to be nonzero.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param(
                "B233k FieldElement",
                "The zero element has no multiplicative inverse",
            ));
        }

        // b_k = a^(2^k - 1); b_{k+j} = b_k^(2^j) * b_j
        let b1 = *self;
        let b2 = b1.sqn(1).mul(&b1);
        let b3 = b2.sqn(1).mul(&b1);
        let b6 = b3.sqn(3).mul(&b3);
        let b7 = b6.sqn(1).mul(&b1);
        let b14 = b7.sqn(7).mul(&b7);
        let b28 = b14.sqn(14).mul(&b14);
        let b29 = b28.sqn(1).mul(&b1);
        let b58 = b29.sqn(29).mul(&b29);
        let b116 = b58.sqn(58).mul(&b58);
        let b232 = b116.sqn(116).mul(&b116);

        // a^(2^233 - 2) = (a^(2^232 - 1))^2
        Ok(b232.square())
    }

    /// Square root: a^(2^232). Squaring is a field automorphism, so every
    /// element has exactly one square root.
    pub fn sqrt(&self) -> Self {
        self.sqn(232)
    }

    /// Trace of this element: Tr(a) = a + a^2 + a^4 + ... + a^(2^232).
    ///
    /// The trace is always 0 or 1; it decides solvability of z^2 + z = a and
    /// disambiguates the two solutions during point decompression.
    pub fn trace(&self) -> u64 {
        let mut t = *self;
        let mut acc = *self;
        for _ in 0..232 {
            t = t.square();
            acc = acc.add(&t);
        }
        acc.0[0] & 1
    }

    /// Repeated squaring: a^(2^n)
    fn sqn(&self, n: usize) -> Self {
        let mut result = *self;
        for _ in 0..n {
            result = result.square();
        }
        result
    }

    /// Interleave a zero bit after each bit of `x` (the squaring map on a
    /// 32-bit chunk).
    #[inline(always)]
    fn spread(x: u32) -> u64 {
        let mut x = x as u64;
        x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
        x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
        x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
        x = (x | (x << 2)) & 0x3333_3333_3333_3333;
        x = (x | (x << 1)) & 0x5555_5555_5555_5555;
        x
    }

    /// Reduce a 466-bit product modulo x^233 + x^74 + 1.
    ///
    /// x^233 = x^74 + 1, so a bit at position p >= 233 folds onto positions
    /// p - 233 and p - 159. Word-aligned: limb i (i in 4..8) covers positions
    /// 64*i + j, and 64*i - 233 = 64*(i-4) + 23, 64*i - 159 = 64*(i-3) + 33.
    /// Folding limb i only touches limbs below it, so one descending pass
    /// clears limbs 7..4; a final partial fold clears bits 233..255.
    fn reduce(mut wide: [u64; 2 * LIMBS]) -> [u64; LIMBS] {
        for i in (LIMBS..2 * LIMBS).rev() {
            let w = wide[i];
            wide[i] = 0;
            wide[i - 4] ^= w << 23;
            wide[i - 3] ^= (w >> 41) ^ (w << 33);
            wide[i - 2] ^= w >> 31;
        }

        let t = wide[3] >> 41;
        wide[3] &= TOP_MASK;
        wide[0] ^= t;
        wide[1] ^= t << 10;

        [wide[0], wide[1], wide[2], wide[3]]
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}
