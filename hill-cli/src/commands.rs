//! One function per subcommand. Each returns the text to print.

use anyhow::{Result, bail};
use hill_crypto::api::{self, CipherResponse, GenerateKeyResponse};
use hill_crypto::key::KeyMatrix;
use hill_crypto::key::validator::{KeyReport, validate};
use hill_crypto::preset::alphabet::character_mapping;
use hill_crypto::ring::Matrix;
use hill_crypto::CipherEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Output switches shared by the subcommands.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub verbose: bool,
    pub json: bool,
}

pub fn run_cipher(
    engine: &CipherEngine,
    direction: Direction,
    text: &str,
    matrix: &Matrix,
    options: OutputOptions,
) -> Result<String> {
    if options.json {
        let response = match direction {
            Direction::Encrypt => api::encrypt(engine, text, matrix),
            Direction::Decrypt => api::decrypt(engine, text, matrix),
        };
        let rendered = serde_json::to_string_pretty(&response)?;
        return match response {
            CipherResponse::Ok { .. } => Ok(rendered),
            CipherResponse::Err { .. } => bail!(rendered),
        };
    }

    let key = validate(matrix)?;
    let output = match direction {
        Direction::Encrypt => {
            let trace = engine.encrypt_with_trace(text, &key)?;
            let mut out = format!("Plaintext: '{}'\nCiphertext: '{}'", text, trace.ciphertext);
            if options.verbose {
                out.push_str(&format!("\n\nDetailed steps:\n{}", trace));
            }
            out
        }
        Direction::Decrypt => {
            let trace = engine.decrypt_with_trace(text, &key)?;
            let mut out = format!("Ciphertext: '{}'\nPlaintext: '{}'", text, trace.plaintext);
            if options.verbose {
                out.push_str(&format!("\n\nDetailed steps:\n{}", trace));
            }
            out
        }
    };
    Ok(output)
}

pub fn run_validate(matrix: &Matrix, options: OutputOptions) -> Result<String> {
    if options.json {
        return Ok(serde_json::to_string_pretty(&api::validate_key(matrix))?);
    }

    let key = match KeyMatrix::try_with(matrix.clone()) {
        Ok(key) => key,
        Err(e) => return Ok(format!("Valid: false\nReason: {}", e)),
    };
    let report = KeyReport::for_key(&key)?;

    let mut out = format!("Key matrix:\n{}\nValid: {}", key, report.valid);
    if !report.valid || options.verbose {
        out.push_str(&format!(
            "\nDeterminant: {}\nDeterminant mod 26: {}\nGCD(det mod 26, 26): {}",
            report.determinant, report.determinant_mod, report.gcd
        ));
    }
    Ok(out)
}

pub fn run_generate(
    engine: &CipherEngine,
    size: usize,
    seed: Option<u64>,
    options: OutputOptions,
) -> Result<String> {
    let key = match seed {
        Some(seed) => engine.generate_random_key_with(size, &mut StdRng::seed_from_u64(seed)),
        None => engine.generate_random_key(size),
    };

    if options.json {
        let response = match key {
            Ok(key) => GenerateKeyResponse::Ok {
                key_matrix: key.into_rows(),
            },
            Err(e) => bail!(serde_json::to_string_pretty(&GenerateKeyResponse::Err {
                error: e.to_string()
            })?),
        };
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let key = key?;
    Ok(format!(
        "Generated {}x{} key matrix:\n{}\nValid: {}",
        size,
        size,
        key,
        engine.validate_key(key.rows())
    ))
}

/// The letter-to-number table, `A = 0` through `Z = 25`.
pub fn run_mapping(options: OutputOptions) -> Result<String> {
    let mapping = character_mapping();
    if options.json {
        let table: serde_json::Map<String, serde_json::Value> = mapping
            .into_iter()
            .map(|(letter, index)| (letter.to_string(), index.into()))
            .collect();
        return Ok(serde_json::to_string_pretty(&table)?);
    }

    let lines: Vec<String> = mapping
        .iter()
        .map(|(letter, index)| format!("{} = {:>2}", letter, index))
        .collect();
    Ok(format!("Character mapping:\n{}", lines.join("\n")))
}
