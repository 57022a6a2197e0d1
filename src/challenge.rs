//! This module defines the server-issued **challenge** value and the store
//! that holds the one the solver is currently working against.
//!
//! The challenge is opaque: the issuing server chooses it, and the solver
//! attaches no meaning to its content beyond feeding it into the hash.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use thiserror::Error;

/// Size of a challenge in bytes.
pub const CHALLENGE_LEN: usize = 32;

/// A single 32-byte proof-of-work challenge.
///
/// Any 32 bytes are acceptable; provenance and freshness are the caller's
/// concern. Serialized as base64, the encoding challenges arrive in.
#[serde_as]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// The raw challenge bytes.
    #[serde_as(as = "Base64")]
    pub bytes: [u8; CHALLENGE_LEN],
}

impl Challenge {
    /// Wraps raw challenge bytes.
    pub const fn new(bytes: [u8; CHALLENGE_LEN]) -> Self {
        Self { bytes }
    }

    /// Decodes a challenge from standard base64.
    pub fn from_base64(encoded: &str) -> Result<Self, ChallengeDecodeError> {
        use base64::{Engine, prelude::BASE64_STANDARD};
        Self::try_from(BASE64_STANDARD.decode(encoded)?.as_slice())
    }

    /// Decodes a challenge from a hex string.
    pub fn from_hex(encoded: &str) -> Result<Self, ChallengeDecodeError> {
        Self::try_from(hex::decode(encoded)?.as_slice())
    }
}

impl TryFrom<&[u8]> for Challenge {
    type Error = ChallengeDecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; CHALLENGE_LEN] = bytes
            .try_into()
            .map_err(|_| ChallengeDecodeError::BadLength(bytes.len()))?;
        Ok(Self { bytes })
    }
}

/// Errors produced while decoding an externally supplied challenge.
#[derive(Debug, Error)]
pub enum ChallengeDecodeError {
    /// The decoded value is not exactly [`CHALLENGE_LEN`] bytes long.
    #[error("challenge must be exactly {CHALLENGE_LEN} bytes, got {0}")]
    BadLength(usize),

    /// The input is not valid base64.
    #[error("invalid base64 challenge: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The input is not valid hex.
    #[error("invalid hex challenge: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Holds the challenge the solver is currently working against.
///
/// The store performs no synchronization of its own. A search snapshots
/// the current value at entry, so replacing the challenge while a search
/// is running never redirects that search; the new value is observed by
/// the next one.
#[derive(Debug, Default, Clone)]
pub struct ChallengeStore {
    current: Challenge,
}

impl ChallengeStore {
    /// Creates a store holding `challenge`.
    pub const fn new(challenge: Challenge) -> Self {
        Self { current: challenge }
    }

    /// Replaces the stored challenge unconditionally.
    pub fn set(&mut self, challenge: Challenge) {
        self.current = challenge;
    }

    /// Returns the currently stored challenge.
    pub const fn get(&self) -> &Challenge {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use base64::{Engine, prelude::BASE64_STANDARD};

    use super::*;

    #[test]
    fn decodes_base64_round_trip() {
        let challenge = Challenge::new([0xAB; CHALLENGE_LEN]);
        let encoded = BASE64_STANDARD.encode(challenge.bytes);
        assert_eq!(Challenge::from_base64(&encoded).unwrap(), challenge);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Challenge::from_hex("00ff").unwrap_err();
        assert!(matches!(err, ChallengeDecodeError::BadLength(2)));
    }

    #[test]
    fn store_replaces_unconditionally() {
        let mut store = ChallengeStore::default();
        store.set(Challenge::new([7; CHALLENGE_LEN]));
        assert_eq!(store.get().bytes, [7; CHALLENGE_LEN]);
        store.set(Challenge::new([9; CHALLENGE_LEN]));
        assert_eq!(store.get().bytes, [9; CHALLENGE_LEN]);
    }
}
