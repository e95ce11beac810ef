//! Property tests for the GF(2^233) field laws and wire formats.

use ccrypt_algorithms::ec::b233k::{
    scalar_mult_base, FieldElement, Point, Scalar, B233K, B233K_FIELD_ELEMENT_SIZE,
    B233K_SCALAR_SIZE,
};
use proptest::prelude::*;

/// Clamp arbitrary bytes into the encoding of a reduced field element.
fn field_element(mut bytes: [u8; B233K_FIELD_ELEMENT_SIZE]) -> FieldElement {
    bytes[0] &= 0x01;
    FieldElement::from_bytes(&bytes).unwrap()
}

proptest! {
    #[test]
    fn addition_is_involutive(a in any::<[u8; 30]>(), b in any::<[u8; 30]>()) {
        let a = field_element(a);
        let b = field_element(b);

        // a + a = 0, and adding b twice is the identity map
        prop_assert!(a.add(&a).is_zero());
        prop_assert_eq!(a.add(&b).add(&b), a);
    }

    #[test]
    fn operations_stay_reduced(a in any::<[u8; 30]>(), b in any::<[u8; 30]>()) {
        let a = field_element(a);
        let b = field_element(b);

        for value in [a.add(&b), a.mul(&b), a.square()] {
            prop_assert!(value.degree().map_or(true, |d| d <= 232));
        }
    }

    #[test]
    fn multiplication_commutes_and_distributes(
        a in any::<[u8; 30]>(),
        b in any::<[u8; 30]>(),
        c in any::<[u8; 30]>(),
    ) {
        let a = field_element(a);
        let b = field_element(b);
        let c = field_element(c);

        prop_assert_eq!(a.mul(&b), b.mul(&a));
        prop_assert_eq!(a.add(&b).mul(&c), a.mul(&c).add(&b.mul(&c)));
    }

    #[test]
    fn squaring_matches_self_multiplication(a in any::<[u8; 30]>()) {
        let a = field_element(a);
        prop_assert_eq!(a.square(), a.mul(&a));
    }

    #[test]
    fn inversion_roundtrips(a in any::<[u8; 30]>()) {
        let a = field_element(a);
        prop_assume!(!a.is_zero());

        let inv = a.invert().unwrap();
        prop_assert_eq!(a.mul(&inv), FieldElement::one());
    }

    #[test]
    fn field_element_byte_roundtrip(a in any::<[u8; 30]>()) {
        let a = field_element(a);
        prop_assert_eq!(FieldElement::from_bytes(&a.to_bytes()).unwrap(), a);
    }

    #[test]
    fn scalars_reduce_below_the_group_order(bytes in any::<[u8; 30]>()) {
        if let Ok(scalar) = Scalar::new(bytes) {
            prop_assert!(scalar.serialize() < B233K.order);
            prop_assert!(!scalar.is_zero());
        }
    }
}

proptest! {
    // Each case costs a full scalar multiplication; keep the count small.
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn public_point_wire_roundtrip(bytes in any::<[u8; B233K_SCALAR_SIZE]>()) {
        prop_assume!(Scalar::new(bytes).is_ok());
        let scalar = Scalar::new(bytes).unwrap();

        let point = scalar_mult_base(&B233K, &scalar).unwrap();
        let encoded = point.serialize_uncompressed();
        prop_assert_eq!(Point::deserialize_uncompressed(&encoded).unwrap(), point);
    }
}
