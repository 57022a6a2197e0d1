//! The nonce-search engine.
//!
//! A [`Solver`] holds the active challenge and a nonce byte-order
//! selection. [`Solver::solve`] brute-forces 64-bit nonces in ascending
//! order from zero until `SHA-256(challenge || nonce)` has the required
//! number of leading zero bits, returning the smallest such nonce.

pub mod error;
mod solve;
pub mod validate;


use sha2::{Digest, Sha256};

use crate::challenge::{Challenge, ChallengeStore};
use crate::endianness::{BigEndian, Endian, EndiannessTag, LittleEndian};

/// Digest length of the hash primitive in bytes.
pub const DIGEST_LEN: usize = 32;

/// Digest length in bits; the largest satisfiable difficulty.
pub const MAX_DIFFICULTY_BITS: u32 = (DIGEST_LEN * 8) as u32;

/// A proof-of-work solver bound to one installed challenge.
#[derive(Debug, Default, Clone)]
pub struct Solver {
    endianness: EndiannessTag,
    store: ChallengeStore,
}

impl Solver {
    /// Creates a solver that serializes nonces with the given byte order.
    ///
    /// The challenge starts out as all zeroes; install the real one with
    /// [`Solver::set_challenge`] before searching.
    pub fn new(endianness: EndiannessTag) -> Self {
        Self {
            endianness,
            store: ChallengeStore::default(),
        }
    }

    /// Installs `challenge` as the active challenge.
    ///
    /// Callable at any time. A search that is already running keeps the
    /// snapshot it took at entry; the new challenge is picked up by the
    /// next call to [`Solver::solve`].
    pub fn set_challenge(&mut self, challenge: Challenge) {
        self.store.set(challenge);
    }

    /// Returns the currently installed challenge.
    pub const fn challenge(&self) -> &Challenge {
        self.store.get()
    }

    /// Checks a claimed nonce against the installed challenge.
    ///
    /// Recomputes the digest for `nonce` and applies the same prefix
    /// predicate the search uses. A difficulty beyond the digest width is
    /// vacuously unsatisfiable and reports `false`.
    pub fn verify_nonce(&self, nonce: u64, difficulty_bits: u32) -> bool {
        let digest = match self.endianness {
            EndiannessTag::Little => Self::digest_for::<LittleEndian>(self.store.get(), nonce),
            EndiannessTag::Big => Self::digest_for::<BigEndian>(self.store.get(), nonce),
        };
        validate::validate_hash(&digest, difficulty_bits)
    }

    /// One-shot digest of `challenge || nonce`.
    fn digest_for<E: Endian>(challenge: &Challenge, nonce: u64) -> [u8; DIGEST_LEN] {
        let mut hasher = Sha256::new();
        hasher.update(challenge.bytes);
        hasher.update(E::u64_to_bytes(nonce));
        hasher.finalize().into()
    }
}
