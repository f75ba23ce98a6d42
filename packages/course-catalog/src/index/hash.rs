//! Polynomial string hash for bucket selection.
//!
//! Horner accumulation over the key's bytes: `h = h * 31 + byte`, starting
//! from 0, in wrapping 32-bit arithmetic. Order-sensitive and deterministic.
//! It does not fold case itself: callers hash the canonical key.

/// Multiplier of the polynomial hash.
pub const HASH_MULTIPLIER: u32 = 31;

/// Raw 32-bit hash of `key`.
pub fn hash_key(key: &str) -> u32 {
    key.bytes().fold(0u32, |h, b| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u32::from(b))
    })
}

/// Bucket index for `key` in a table of `bucket_count` buckets.
///
/// `bucket_count` must be non-zero; `CourseIndex` guarantees this.
pub fn bucket_for(key: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0, "bucket_count must be non-zero");
    hash_key(key) as usize % bucket_count
}
