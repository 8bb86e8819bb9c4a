use num_bigint::{BigInt, Sign};

/// Decode a binary blob into an unsigned integer bitmask.
///
/// Byte 0 becomes the most-significant byte: every byte contributes exactly
/// two hex digits, so leading zero bytes keep their place and only shift the
/// value. An empty blob decodes to zero.
pub fn decode_binary(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}
