//! Command-line front end for the Hill cipher.

mod commands;
mod key_input;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hill_crypto::{CipherConfig, CipherEngine, TrailingBlockPolicy};

use crate::commands::{
    Direction, OutputOptions, run_cipher, run_generate, run_mapping, run_validate,
};
use crate::key_input::parse_matrix;

/// Hill cipher CLI.
#[derive(Parser)]
#[command(name = "hill", version, about = "Hill cipher (matrix multiplication mod 26)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Output {
    /// Show detailed steps.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
    /// Print the result as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl From<&Output> for OutputOptions {
    fn from(output: &Output) -> Self {
        OutputOptions {
            verbose: output.verbose,
            json: output.json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a key matrix.
    Encrypt {
        /// Text to encrypt; non-letters are ignored.
        #[arg(short, long)]
        text: String,
        /// Key matrix as "[[3,2],[5,7]]" or "3,2;5,7".
        #[arg(short, long, value_name = "MATRIX")]
        key: String,
        #[command(flatten)]
        output: Output,
    },
    /// Decrypt text with a key matrix.
    Decrypt {
        /// Ciphertext to decrypt; non-letters are ignored.
        #[arg(short, long)]
        text: String,
        /// Key matrix as "[[3,2],[5,7]]" or "3,2;5,7".
        #[arg(short, long, value_name = "MATRIX")]
        key: String,
        /// Fail when the ciphertext does not split into whole blocks instead of dropping the rest.
        #[arg(long, default_value_t = false)]
        strict: bool,
        #[command(flatten)]
        output: Output,
    },
    /// Check whether a key matrix is invertible mod 26.
    Validate {
        /// Key matrix as "[[3,2],[5,7]]" or "3,2;5,7".
        #[arg(short, long, value_name = "MATRIX")]
        key: String,
        #[command(flatten)]
        output: Output,
    },
    /// Generate a random valid key matrix.
    Generate {
        /// Side length of the matrix.
        #[arg(short, long, default_value_t = 2)]
        size: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        output: Output,
    },
    /// Show the letter-to-number table (A = 0 ... Z = 25).
    Mapping {
        #[command(flatten)]
        output: Output,
    },
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Encrypt { text, key, output } => run_cipher(
            &CipherEngine::new(),
            Direction::Encrypt,
            &text,
            &parse_matrix(&key)?,
            (&output).into(),
        ),
        Commands::Decrypt {
            text,
            key,
            strict,
            output,
        } => {
            let policy = if strict {
                TrailingBlockPolicy::Reject
            } else {
                TrailingBlockPolicy::Truncate
            };
            let engine =
                CipherEngine::with_config(CipherConfig::default().with_trailing_block(policy));
            run_cipher(
                &engine,
                Direction::Decrypt,
                &text,
                &parse_matrix(&key)?,
                (&output).into(),
            )
        }
        Commands::Validate { key, output } => run_validate(&parse_matrix(&key)?, (&output).into()),
        Commands::Generate { size, seed, output } => {
            run_generate(&CipherEngine::new(), size, seed, (&output).into())
        }
        Commands::Mapping { output } => run_mapping((&output).into()),
    }
}

fn main() -> Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli = Cli::parse();
    let output = run(cli)?;
    println!("{}", output);
    Ok(())
}
