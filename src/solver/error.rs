//! This module defines the failures a search can report.

use thiserror::Error;

use crate::solver::MAX_DIFFICULTY_BITS;

/// Failures surfaced by [`Solver::solve`](crate::solver::Solver::solve).
///
/// None of these is recoverable by retrying: with the same challenge and
/// difficulty the search is deterministic and the outcome cannot change.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The requested difficulty demands more leading zero bits than the
    /// digest has bits, so no nonce could ever satisfy it.
    #[error("difficulty of {0} bits exceeds the {MAX_DIFFICULTY_BITS}-bit digest width")]
    InvalidDifficulty(u32),

    /// Every nonce in the 64-bit search space was tried without success.
    #[error("no valid nonce found in the 64-bit search space")]
    Exhausted,

    /// The caller asked the search to stop before a nonce was found.
    #[error("search cancelled")]
    Cancelled,
}
