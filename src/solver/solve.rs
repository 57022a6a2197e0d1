//! This module implements the [`Solver::solve`] search loop.
//!
//! The loop streams `challenge || nonce` through SHA-256 for each candidate
//! nonce, reusing one hasher across iterations, and stops at the first
//! digest that satisfies the prefix predicate.

use std::sync::atomic::{AtomicBool, Ordering};

use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::challenge::Challenge;
use crate::endianness::{BigEndian, Endian, EndiannessTag, LittleEndian};
use crate::solver::error::SolveError;
use crate::solver::validate::validate_hash;
use crate::solver::{DIGEST_LEN, MAX_DIFFICULTY_BITS, Solver};

/// How often the cancellation flag is polled, in iterations.
const CANCEL_POLL_INTERVAL: u64 = 1 << 16;

/// How often search progress is traced, in iterations.
const PROGRESS_INTERVAL: u64 = 1 << 24;

impl Solver {
    /// Searches for the smallest nonce satisfying `difficulty_bits`.
    ///
    /// The installed challenge is snapshotted at entry, so a concurrent
    /// [`Solver::set_challenge`] cannot redirect the search mid-flight.
    /// Blocks the calling thread until a nonce is found or the search
    /// fails; expected cost doubles with every additional difficulty bit.
    pub fn solve(&self, difficulty_bits: u32) -> Result<u64, SolveError> {
        self.solve_inner(difficulty_bits, None)
    }

    /// Like [`Solver::solve`], but polls `cancel` periodically and aborts
    /// with [`SolveError::Cancelled`] once it reads `true`.
    pub fn solve_cancellable(
        &self,
        difficulty_bits: u32,
        cancel: &AtomicBool,
    ) -> Result<u64, SolveError> {
        self.solve_inner(difficulty_bits, Some(cancel))
    }

    fn solve_inner(
        &self,
        difficulty_bits: u32,
        cancel: Option<&AtomicBool>,
    ) -> Result<u64, SolveError> {
        if difficulty_bits > MAX_DIFFICULTY_BITS {
            return Err(SolveError::InvalidDifficulty(difficulty_bits));
        }

        // Snapshot: the search must not observe later challenge updates.
        let challenge = *self.store.get();

        match self.endianness {
            EndiannessTag::Little => Self::search::<LittleEndian>(&challenge, difficulty_bits, cancel),
            EndiannessTag::Big => Self::search::<BigEndian>(&challenge, difficulty_bits, cancel),
        }
    }

    /// The search loop, specialized by nonce byte order.
    fn search<E: Endian>(
        challenge: &Challenge,
        difficulty_bits: u32,
        cancel: Option<&AtomicBool>,
    ) -> Result<u64, SolveError> {
        let mut hasher = Sha256::new();
        let mut nonce: u64 = 0;

        loop {
            if let Some(flag) = cancel
                && nonce.is_multiple_of(CANCEL_POLL_INTERVAL)
                && flag.load(Ordering::Relaxed)
            {
                return Err(SolveError::Cancelled);
            }
            if nonce != 0 && nonce.is_multiple_of(PROGRESS_INTERVAL) {
                trace!(nonce, difficulty_bits, "still searching");
            }

            hasher.update(challenge.bytes);
            hasher.update(E::u64_to_bytes(nonce));
            let digest: [u8; DIGEST_LEN] = hasher.finalize_reset().into();

            if validate_hash(&digest, difficulty_bits) {
                debug!(nonce, difficulty_bits, "found valid nonce");
                return Ok(nonce);
            }

            nonce = nonce.checked_add(1).ok_or(SolveError::Exhausted)?;
        }
    }
}
