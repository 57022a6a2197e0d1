//! Byte-order conversions for the nonce serialization.
//!
//! The byte order used to splice the nonce into the hash input is part of
//! the compatibility contract with the verifier on the other side, so it is
//! an explicit parameter here rather than an implicit memory-layout
//! dependency. The reference verifier consumes little-endian nonces, which
//! is the default.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Fixed-width `u64` byte-order conversions.
pub trait Endian {
    /// Decodes a `u64` from its 8-byte representation.
    fn u64_from_bytes(bytes: &[u8; 8]) -> u64;
    /// Encodes a `u64` into its 8-byte representation.
    fn u64_to_bytes(x: u64) -> [u8; 8];
}

/// Byte-order selector carried in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum EndiannessTag {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl EndiannessTag {
    /// Decodes a `u64` using the selected byte order.
    pub fn u64_from_bytes(self, bytes: &[u8; 8]) -> u64 {
        match self {
            EndiannessTag::Little => LittleEndian::u64_from_bytes(bytes),
            EndiannessTag::Big => BigEndian::u64_from_bytes(bytes),
        }
    }

    /// Encodes a `u64` using the selected byte order.
    pub fn u64_to_bytes(self, x: u64) -> [u8; 8] {
        match self {
            EndiannessTag::Little => LittleEndian::u64_to_bytes(x),
            EndiannessTag::Big => BigEndian::u64_to_bytes(x),
        }
    }
}

impl std::fmt::Display for EndiannessTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndiannessTag::Little => write!(f, "little"),
            EndiannessTag::Big => write!(f, "big"),
        }
    }
}

/// Least-significant-byte-first encoding.
pub struct LittleEndian;

/// Most-significant-byte-first encoding.
pub struct BigEndian;

impl Endian for LittleEndian {
    #[inline]
    fn u64_from_bytes(b: &[u8; 8]) -> u64 {
        u64::from_le_bytes(*b)
    }

    #[inline]
    fn u64_to_bytes(x: u64) -> [u8; 8] {
        x.to_le_bytes()
    }
}

impl Endian for BigEndian {
    #[inline]
    fn u64_from_bytes(b: &[u8; 8]) -> u64 {
        u64::from_be_bytes(*b)
    }

    #[inline]
    fn u64_to_bytes(x: u64) -> [u8; 8] {
        x.to_be_bytes()
    }
}
