//! Step-by-step records of an encryption or decryption, for display only.

use crate::ring::{Matrix, Vector};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use std::fmt;

/// One block before and after multiplication by the key (or its inverse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStep {
    pub input: Vector,
    pub output: Vector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionTrace {
    pub original_text: String,
    /// Normalized letters including the 'X' padding.
    pub padded_text: String,
    pub text_numbers: Vector,
    pub key_matrix: Matrix,
    pub blocks: Vec<BlockStep>,
    pub final_numbers: Vector,
    pub ciphertext: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptionTrace {
    pub ciphertext: String,
    pub cipher_numbers: Vector,
    pub key_matrix: Matrix,
    pub inverse_key_matrix: Matrix,
    /// Trailing letters that did not fill a block and were left out.
    pub dropped_numbers: Vector,
    pub blocks: Vec<BlockStep>,
    pub final_numbers: Vector,
    pub plaintext: String,
}

fn numbers(values: &[i64]) -> String {
    format!("[{}]", values.iter().join(", "))
}

fn matrix(rows: &Matrix) -> String {
    format!("[{}]", rows.iter().map(|row| numbers(row)).join(", "))
}

fn block_steps(f: &mut fmt::Formatter<'_>, steps: &[BlockStep]) -> fmt::Result {
    for (i, step) in steps.iter().enumerate() {
        writeln!(
            f,
            "  block {}: {} -> {}",
            i + 1,
            numbers(&step.input),
            numbers(&step.output)
        )?;
    }
    Ok(())
}

impl fmt::Display for EncryptionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "original:   '{}'", self.original_text)?;
        writeln!(f, "padded:     '{}'", self.padded_text)?;
        writeln!(f, "numbers:    {}", numbers(&self.text_numbers))?;
        writeln!(f, "key:        {}", matrix(&self.key_matrix))?;
        block_steps(f, &self.blocks)?;
        writeln!(f, "result:     {}", numbers(&self.final_numbers))?;
        write!(f, "ciphertext: '{}'", self.ciphertext)
    }
}

impl fmt::Display for DecryptionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ciphertext: '{}'", self.ciphertext)?;
        writeln!(f, "numbers:    {}", numbers(&self.cipher_numbers))?;
        writeln!(f, "key:        {}", matrix(&self.key_matrix))?;
        writeln!(f, "inverse:    {}", matrix(&self.inverse_key_matrix))?;
        if !self.dropped_numbers.is_empty() {
            writeln!(f, "dropped:    {}", numbers(&self.dropped_numbers))?;
        }
        block_steps(f, &self.blocks)?;
        writeln!(f, "result:     {}", numbers(&self.final_numbers))?;
        write!(f, "plaintext:  '{}'", self.plaintext)
    }
}
