use base64::{Engine, prelude::BASE64_STANDARD};
use clap::{Parser, Subcommand};
use powgrind::{challenge::Challenge, config::Config, solver::Solver};
use rand::{RngCore, rngs::ThreadRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a nonce satisfying a challenge
    Solve {
        #[command(flatten)]
        config: Config,

        /// Base64-encoded 32-byte challenge; random if omitted
        #[arg(long)]
        challenge: Option<String>,

        /// Hex-encoded 32-byte challenge
        #[arg(long, conflicts_with = "challenge")]
        challenge_hex: Option<String>,
    },

    /// Check a claimed nonce against a challenge
    Verify {
        #[command(flatten)]
        config: Config,

        /// Base64-encoded 32-byte challenge
        #[arg(long)]
        challenge: String,

        /// The claimed nonce, decimal
        #[arg(long, conflicts_with = "nonce_b64")]
        nonce: Option<u64>,

        /// The claimed nonce as base64-encoded bytes, as `solve` prints it
        #[arg(long)]
        nonce_b64: Option<String>,
    },
}

// -------------------------------
// Challenge helpers
// -------------------------------

fn build_random_challenge() -> Challenge {
    let mut bytes = [0u8; 32];
    let mut rng = ThreadRng::default();
    rng.fill_bytes(&mut bytes);
    Challenge::new(bytes)
}

fn build_challenge(base64: Option<String>, hex: Option<String>) -> Challenge {
    match (base64, hex) {
        (Some(encoded), _) => Challenge::from_base64(&encoded).expect("invalid --challenge"),
        (None, Some(encoded)) => Challenge::from_hex(&encoded).expect("invalid --challenge-hex"),
        (None, None) => build_random_challenge(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            challenge,
            challenge_hex,
        } => {
            let challenge = build_challenge(challenge, challenge_hex);
            eprintln!("Challenge: {}", BASE64_STANDARD.encode(challenge.bytes));

            let mut solver = Solver::new(config.endianness);
            solver.set_challenge(challenge);

            match solver.solve(config.difficulty_bits) {
                Ok(nonce) => {
                    println!("{nonce}");
                    println!(
                        "{}",
                        BASE64_STANDARD.encode(config.endianness.u64_to_bytes(nonce))
                    );
                }
                Err(err) => {
                    eprintln!("solve failed: {err}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Verify {
            config,
            challenge,
            nonce,
            nonce_b64,
        } => {
            let challenge = Challenge::from_base64(&challenge).expect("invalid --challenge");
            let nonce = match (nonce, nonce_b64) {
                (Some(nonce), _) => nonce,
                (None, Some(encoded)) => {
                    let bytes = BASE64_STANDARD.decode(&encoded).expect("invalid --nonce-b64");
                    let bytes: [u8; 8] = bytes
                        .as_slice()
                        .try_into()
                        .expect("--nonce-b64 must decode to exactly 8 bytes");
                    config.endianness.u64_from_bytes(&bytes)
                }
                (None, None) => {
                    eprintln!("one of --nonce or --nonce-b64 is required");
                    std::process::exit(2);
                }
            };

            let mut solver = Solver::new(config.endianness);
            solver.set_challenge(challenge);

            if solver.verify_nonce(nonce, config.difficulty_bits) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
    }
}
