#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod challenge;
pub mod config;
pub mod endianness;
pub mod solver;
