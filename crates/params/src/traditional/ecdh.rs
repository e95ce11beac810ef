//! Constants for Elliptic Curve Diffie-Hellman over sect233k1 (K-233)

/// Size of a sect233k1 scalar in bytes (233 bits -> 30 bytes)
pub const ECDH_B233K_SCALAR_SIZE: usize = 30;

/// Size of a sect233k1 field element in bytes (233 bits -> 30 bytes)
pub const ECDH_B233K_FIELD_ELEMENT_SIZE: usize = 30;

/// Size of a public key for ECDH using sect233k1 in bytes (x || y coordinates)
pub const ECDH_B233K_PUBLIC_KEY_SIZE: usize = 2 * ECDH_B233K_FIELD_ELEMENT_SIZE;

/// Size of the raw (un-derived) shared secret for ECDH using sect233k1 in bytes
pub const ECDH_B233K_SHARED_SECRET_SIZE: usize = 2 * ECDH_B233K_FIELD_ELEMENT_SIZE;

/// Parameters of a binary Koblitz curve y^2 + xy = x^3 + 1 over GF(2^233).
///
/// The engine takes these by reference instead of reading a module global, so
/// a test harness can substitute an alternate generator (e.g. a small-order
/// point) without recompiling. The reduction polynomial is a structural
/// property of the field implementation; its exponents are recorded here so
/// consumers can cross-check the two against each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct B233kCurveParams {
    /// Human-readable curve name
    pub name: &'static str,
    /// x-coordinate of the generator point, big-endian
    pub g_x: [u8; ECDH_B233K_FIELD_ELEMENT_SIZE],
    /// y-coordinate of the generator point, big-endian
    pub g_y: [u8; ECDH_B233K_FIELD_ELEMENT_SIZE],
    /// Order n of the generator's subgroup, big-endian
    pub order: [u8; ECDH_B233K_SCALAR_SIZE],
    /// log2 of the cofactor h (h = 4 for sect233k1)
    pub cofactor_log2: u32,
    /// Exponents of the nonzero terms of the reduction polynomial,
    /// highest first: x^233 + x^74 + 1
    pub reduction_terms: [u32; 3],
}

/// The SEC 2 / NIST K-233 parameter set.
pub const B233K: B233kCurveParams = B233kCurveParams {
    name: "sect233k1",
    // SEC 2: G_x = 017232BA 853A7E73 1AF129F2 2FF41495 63A419C2 6BF50A4C
    //              9D6EEFAD 6126
    g_x: [
        0x01, 0x72, 0x32, 0xBA, 0x85, 0x3A, 0x7E, 0x73, 0x1A, 0xF1, 0x29, 0xF2,
        0x2F, 0xF4, 0x14, 0x95, 0x63, 0xA4, 0x19, 0xC2, 0x6B, 0xF5, 0x0A, 0x4C,
        0x9D, 0x6E, 0xEF, 0xAD, 0x61, 0x26,
    ],
    // SEC 2: G_y = 01DB537D ECE819B7 F70F555A 67C427A8 CD9BF18A EB9B56E0
    //              C11056FA E6A3
    g_y: [
        0x01, 0xDB, 0x53, 0x7D, 0xEC, 0xE8, 0x19, 0xB7, 0xF7, 0x0F, 0x55, 0x5A,
        0x67, 0xC4, 0x27, 0xA8, 0xCD, 0x9B, 0xF1, 0x8A, 0xEB, 0x9B, 0x56, 0xE0,
        0xC1, 0x10, 0x56, 0xFA, 0xE6, 0xA3,
    ],
    // SEC 2: n = 80 00000000 00000000 00000000 00069D5B B915BCD4 6EFB1AD5
    //            F173ABDF
    order: [
        0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x06, 0x9D, 0x5B, 0xB9, 0x15, 0xBC, 0xD4, 0x6E, 0xFB,
        0x1A, 0xD5, 0xF1, 0x73, 0xAB, 0xDF,
    ],
    cofactor_log2: 2,
    reduction_terms: [233, 74, 0],
};
