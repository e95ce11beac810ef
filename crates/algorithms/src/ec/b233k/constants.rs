//! Shared constants for sect233k1 operations

/// Size of a sect233k1 scalar in bytes (233 bits -> 30 bytes)
pub const B233K_SCALAR_SIZE: usize = 30;

/// Width of a sect233k1 scalar in bits; also the iteration count of the
/// scalar-multiplication ladder
pub const B233K_SCALAR_BITS: usize = 233;

/// Size of a sect233k1 field element in bytes (233 bits -> 30 bytes)
pub const B233K_FIELD_ELEMENT_SIZE: usize = 30;

/// Size of an uncompressed sect233k1 point in bytes: x-coordinate followed by
/// y-coordinate, no format byte. The all-zero encoding is the point at
/// infinity.
pub const B233K_POINT_UNCOMPRESSED_SIZE: usize = 2 * B233K_FIELD_ELEMENT_SIZE; // 60 bytes

/// Size of a compressed sect233k1 point in bytes: format byte (0x02/0x03) + x-coordinate
pub const B233K_POINT_COMPRESSED_SIZE: usize = 1 + B233K_FIELD_ELEMENT_SIZE; // 31 bytes
