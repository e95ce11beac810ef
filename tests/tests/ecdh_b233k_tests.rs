//! Cross-crate ECDH-B233k tests: the protocol layer against the arithmetic
//! layer it is built on.

use ccrypt_algorithms::ec::b233k as ec;
use ccrypt_api::{KeyExchange, Serialize};
use ccrypt_common::security::SecretBuffer;
use ccrypt_kex::ecdh::b233k::{EcdhB233k, EcdhB233kPublicKey};
use ccrypt_params::B233K;
use ccrypt_tests::seeded_rng;

#[test]
fn curve_constants_match_sec2_vectors() {
    // SEC 2 sect233k1 generator and order, spelled as in the standard
    let g_x =
        hex::decode("017232BA853A7E731AF129F22FF4149563A419C26BF50A4C9D6EEFAD6126").unwrap();
    let g_y =
        hex::decode("01DB537DECE819B7F70F555A67C427A8CD9BF18AEB9B56E0C11056FAE6A3").unwrap();
    let order =
        hex::decode("008000000000000000000000000000069D5BB915BCD46EFB1AD5F173ABDF").unwrap();

    assert_eq!(B233K.g_x.as_slice(), g_x.as_slice());
    assert_eq!(B233K.g_y.as_slice(), g_y.as_slice());
    assert_eq!(B233K.order.as_slice(), order.as_slice());
    assert_eq!(B233K.cofactor_log2, 2);
    assert_eq!(B233K.reduction_terms, [233, 74, 0]);
}

#[test]
fn agreement_is_symmetric() {
    let (alice_pk, alice_sk) = EcdhB233k::keypair(&mut seeded_rng(1)).unwrap();
    let (bob_pk, bob_sk) = EcdhB233k::keypair(&mut seeded_rng(2)).unwrap();

    let alice_secret = EcdhB233k::shared_secret(&alice_sk, &bob_pk).unwrap();
    let bob_secret = EcdhB233k::shared_secret(&bob_sk, &alice_pk).unwrap();

    assert_eq!(alice_secret.as_ref(), bob_secret.as_ref());
}

#[test]
fn protocol_layer_matches_arithmetic_layer() {
    // The kex result must be exactly scalar * Q followed by cofactor clearing
    let (_, alice_sk) = EcdhB233k::keypair(&mut seeded_rng(3)).unwrap();
    let (bob_pk, _) = EcdhB233k::keypair(&mut seeded_rng(4)).unwrap();

    let secret = EcdhB233k::shared_secret(&alice_sk, &bob_pk).unwrap();

    let mut raw = [0u8; ec::B233K_SCALAR_SIZE];
    raw.copy_from_slice(alice_sk.as_ref());
    let scalar = ec::Scalar::from_secret_buffer(SecretBuffer::new(raw)).unwrap();

    let peer = ec::Point::deserialize_uncompressed(bob_pk.as_ref()).unwrap();
    let expected = ec::clear_cofactor(&B233K, &ec::scalar_mult(&scalar, &peer).unwrap());

    assert_eq!(secret.as_ref(), expected.serialize_uncompressed());
}

#[test]
fn tampered_public_key_never_yields_the_same_secret() {
    let (_, alice_sk) = EcdhB233k::keypair(&mut seeded_rng(5)).unwrap();
    let (bob_pk, _) = EcdhB233k::keypair(&mut seeded_rng(6)).unwrap();

    let honest = EcdhB233k::shared_secret(&alice_sk, &bob_pk).unwrap();

    // Flip one bit of Bob's key. Almost every corruption is off-curve and
    // rejected; if the corrupted key happens to decode, the secret must differ.
    let mut corrupted_bytes = bob_pk.to_bytes();
    corrupted_bytes[10] ^= 0x40;
    let corrupted = EcdhB233kPublicKey::from_bytes(&corrupted_bytes).unwrap();

    if let Ok(secret) = EcdhB233k::shared_secret(&alice_sk, &corrupted) {
        assert_ne!(secret.as_ref(), honest.as_ref());
    }
}

#[test]
fn public_key_wire_roundtrip_is_identity() {
    let (pk, _) = EcdhB233k::keypair(&mut seeded_rng(7)).unwrap();

    let decoded = ec::Point::deserialize_uncompressed(pk.as_ref()).unwrap();
    assert_eq!(decoded.serialize_uncompressed().as_slice(), pk.as_ref());
}
