//! BKDR string hash, seed 131.
//!
//! A multiplicative hash for spreading string keys over the buckets of a
//! power-of-two table. Deterministic and unseeded; it offers no collision
//! resistance and must not be fed adversarial input where that matters.

const SEED: u32 = 131;

/// Hashes the bytes of `key` with `h = h * 131 + byte`, wrapping 32-bit
/// arithmetic, then clears the sign bit so the result lies in
/// `[0, 2^31 - 1]`.
///
/// The empty string hashes to 0.
pub fn hash(key: &str) -> u32 {
    let mut h: u32 = 0;
    for byte in key.bytes() {
        h = h.wrapping_mul(SEED).wrapping_add(byte as u32);
    }
    h & 0x7FFF_FFFF
}

/// Hashes `key` and masks the result down to a bucket index.
///
/// `mask` is intended to be `table_len - 1` for a power-of-two table, so the
/// result is always `<= mask`.
pub fn bucket(key: &str, mask: u32) -> u32 {
    hash(key) & mask
}
