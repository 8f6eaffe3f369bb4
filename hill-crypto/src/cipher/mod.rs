//! # Cipher Engine
//!
//! Hill encryption multiplies each block of `n` letter values by the `n×n` key mod 26;
//! decryption multiplies by the key's inverse mod 26. The engine holds only an immutable
//! [`CipherConfig`], so one instance can be shared freely between threads.

pub mod config;
pub mod trace;

pub use config::{CipherConfig, TrailingBlockPolicy};
pub use trace::{BlockStep, DecryptionTrace, EncryptionTrace};

use crate::codec::{blocks, decode, encode, pad_to_block};
use crate::errors::HillCryptoError;
use crate::key::KeyMatrix;
use crate::key::generator::generate_random_key_with;
use crate::key::validator::{ensure_valid, is_valid};
use crate::ring::matrix_ops::matrix_vector_mul;
use crate::ring::{Matrix, Ring, Vector};

use log::{debug, trace, warn};
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct CipherEngine {
    config: CipherConfig,
}

impl CipherEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CipherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Whether `matrix` can be used as a key.
    pub fn validate_key(&self, matrix: &Matrix) -> bool {
        is_valid(matrix)
    }

    /// Encrypts `plaintext`, padding the last block with 'X'.
    ///
    /// Non-letters are dropped, so `""` (or text without letters) encrypts to `""`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::cipher::CipherEngine;
    /// # use hill_crypto::key::KeyMatrix;
    /// let engine = CipherEngine::new();
    /// let ciphertext = engine.encrypt("Hello", &KeyMatrix::default_2x2()).unwrap();
    /// assert_eq!(ciphertext, "DLDCKX");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidKeyMatrix` if the key is not invertible mod 26.
    pub fn encrypt(&self, plaintext: &str, key: &KeyMatrix) -> Result<String, HillCryptoError> {
        Ok(self.encrypt_with_trace(plaintext, key)?.ciphertext)
    }

    /// [`encrypt`](Self::encrypt), also returning every intermediate step.
    pub fn encrypt_with_trace(
        &self,
        plaintext: &str,
        key: &KeyMatrix,
    ) -> Result<EncryptionTrace, HillCryptoError> {
        ensure_valid(key)?;

        let block_size = key.size();
        let text_numbers = encode(plaintext);
        let padded = pad_to_block(&text_numbers, block_size)?;

        let steps = transform_blocks(key.rows(), blocks(&padded, block_size)?)?;
        let final_numbers: Vector = steps.iter().flat_map(|s| s.output.iter().copied()).collect();
        let ciphertext = decode(&final_numbers);

        debug!(
            "encrypted {} letters ({} padding) in {} block(s) of {}",
            text_numbers.len(),
            padded.len() - text_numbers.len(),
            steps.len(),
            block_size
        );

        Ok(EncryptionTrace {
            original_text: plaintext.to_string(),
            padded_text: decode(&padded),
            text_numbers,
            key_matrix: key.rows().clone(),
            blocks: steps,
            final_numbers,
            ciphertext,
        })
    }

    /// Decrypts `ciphertext` with the inverse of `key`.
    ///
    /// Padding added by encryption is kept: the result may end in 'X'.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidKeyMatrix` if the key is not invertible mod 26, and
    /// `HillCryptoError::MalformedCiphertext` for a partial trailing block when the engine is
    /// configured with [`TrailingBlockPolicy::Reject`].
    pub fn decrypt(&self, ciphertext: &str, key: &KeyMatrix) -> Result<String, HillCryptoError> {
        Ok(self.decrypt_with_trace(ciphertext, key)?.plaintext)
    }

    /// [`decrypt`](Self::decrypt), also returning every intermediate step.
    pub fn decrypt_with_trace(
        &self,
        ciphertext: &str,
        key: &KeyMatrix,
    ) -> Result<DecryptionTrace, HillCryptoError> {
        ensure_valid(key)?;
        // validated keys always have an inverse; an error here is an internal inconsistency
        let inverse = key.inverse().map_err(|e| match e {
            HillCryptoError::NoInverseExists(reason) => HillCryptoError::NoInverseExists(format!(
                "validated key has no inverse: {}",
                reason
            )),
            other => other,
        })?;

        let block_size = key.size();
        let cipher_numbers = encode(ciphertext);
        let full_len = cipher_numbers.len() - cipher_numbers.len() % block_size;
        if full_len != cipher_numbers.len() {
            match self.config.trailing_block {
                TrailingBlockPolicy::Reject => {
                    return Err(HillCryptoError::MalformedCiphertext {
                        length: cipher_numbers.len(),
                        block_size,
                    });
                }
                TrailingBlockPolicy::Truncate => warn!(
                    "ciphertext has {} letters, dropping the last {} (block size {})",
                    cipher_numbers.len(),
                    cipher_numbers.len() - full_len,
                    block_size
                ),
            }
        }

        let steps = transform_blocks(&inverse, blocks(&cipher_numbers, block_size)?)?;
        let final_numbers: Vector = steps.iter().flat_map(|s| s.output.iter().copied()).collect();
        let plaintext = decode(&final_numbers);

        debug!(
            "decrypted {} block(s) of {}",
            steps.len(),
            block_size
        );

        Ok(DecryptionTrace {
            ciphertext: ciphertext.to_string(),
            dropped_numbers: cipher_numbers[full_len..].to_vec(),
            cipher_numbers,
            key_matrix: key.rows().clone(),
            inverse_key_matrix: inverse,
            blocks: steps,
            final_numbers,
            plaintext,
        })
    }

    /// A random key of side `n` that is invertible mod 26.
    pub fn generate_random_key(&self, n: usize) -> Result<KeyMatrix, HillCryptoError> {
        self.generate_random_key_with(n, &mut rand::rng())
    }

    /// [`generate_random_key`](Self::generate_random_key) drawing from `rng`.
    pub fn generate_random_key_with<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<KeyMatrix, HillCryptoError> {
        generate_random_key_with(n, self.config.max_key_attempts, rng)
    }
}

/// Multiplies every block (as a column vector) by `matrix` mod 26.
fn transform_blocks(matrix: &Matrix, blocks: Vec<Vector>) -> Result<Vec<BlockStep>, HillCryptoError> {
    let ring = Ring::ALPHABET;
    blocks
        .into_iter()
        .map(|input| {
            let output = matrix_vector_mul(matrix, &input, &ring)?;
            trace!("block {:?} -> {:?}", input, output);
            Ok(BlockStep { input, output })
        })
        .collect()
}
