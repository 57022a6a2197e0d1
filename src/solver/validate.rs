//! The digest prefix predicate.

use crate::solver::{DIGEST_LEN, MAX_DIFFICULTY_BITS};

/// Returns `true` when `digest` starts with at least `difficulty_bits`
/// zero bits.
///
/// Checks `difficulty_bits / 8` whole bytes, short-circuiting on the first
/// non-zero one, then masks the top `difficulty_bits % 8` bits of the next
/// byte. A difficulty beyond the digest width is unsatisfiable and always
/// reports `false`. Pure and allocation-free.
#[must_use]
pub fn validate_hash(digest: &[u8; DIGEST_LEN], difficulty_bits: u32) -> bool {
    if difficulty_bits > MAX_DIFFICULTY_BITS {
        return false;
    }

    let q = (difficulty_bits / 8) as usize;
    let r = difficulty_bits % 8;

    for &byte in &digest[..q] {
        if byte != 0 {
            return false;
        }
    }

    if r > 0 {
        // Select the r most significant bits of the partial byte.
        let mask = 0xFFu8 << (8 - r);
        if digest[q] & mask != 0 {
            return false;
        }
    }

    true
}
