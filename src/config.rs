//! This module defines the configuration parameters for a proof-of-work
//! search: the required difficulty and the nonce byte order, which together
//! with the challenge fully determine the nonce the search returns.

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::endianness::EndiannessTag;

/// Parameters governing a proof-of-work search.
///
/// `difficulty_bits` is measured against the 256-bit SHA-256 digest, so
/// meaningful values are 0 through 256; higher values exponentially
/// increase the expected search cost and are rejected by the solver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Args)]
pub struct Config {
    /// The required number of leading zero bits in the digest
    #[arg(long, default_value_t = Config::default().difficulty_bits)]
    pub difficulty_bits: u32,

    /// Byte order used to serialize the nonce into the hash input
    #[arg(long, value_enum, default_value_t = Config::default().endianness)]
    pub endianness: EndiannessTag,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty_bits: 20,
            endianness: EndiannessTag::Little,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn cli_defaults_match_config_default() {
        let cli = Cli::parse_from(["powgrind"]);
        let default = Config::default();
        assert_eq!(cli.config.difficulty_bits, default.difficulty_bits);
        assert_eq!(cli.config.endianness, default.endianness);
    }
}
