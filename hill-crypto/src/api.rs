//! The four operations offered to presentation layers, taking loose input and returning
//! serializable responses. Errors never escape as `Err`: they come back as `{"error": ...}`.

use crate::cipher::CipherEngine;
use crate::codec::encode;
use crate::errors::HillCryptoError;
use crate::key::validator::validate;
use crate::ring::Matrix;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of encrypt or decrypt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CipherResponse {
    Ok { result: String },
    Err { error: String },
}

impl From<Result<String, HillCryptoError>> for CipherResponse {
    fn from(result: Result<String, HillCryptoError>) -> Self {
        match result {
            Ok(result) => CipherResponse::Ok { result },
            Err(e) => CipherResponse::Err {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateKeyResponse {
    Ok { key_matrix: Matrix },
    Err { error: String },
}

pub fn validate_key(matrix: &Matrix) -> ValidateResponse {
    match validate(matrix) {
        Ok(_) => ValidateResponse {
            valid: true,
            error: None,
        },
        Err(e) => ValidateResponse {
            valid: false,
            error: Some(e.to_string()),
        },
    }
}

/// Encrypts `plaintext`; text without any A-Z letter is refused instead of producing `""`.
pub fn encrypt(engine: &CipherEngine, plaintext: &str, matrix: &Matrix) -> CipherResponse {
    let result = validate(matrix).and_then(|key| {
        if encode(plaintext).is_empty() {
            return Err(HillCryptoError::InvalidParameters(
                "plaintext must contain alphabetic characters (A-Z)".into(),
            ));
        }
        engine.encrypt(plaintext, &key)
    });
    result.into()
}

pub fn decrypt(engine: &CipherEngine, ciphertext: &str, matrix: &Matrix) -> CipherResponse {
    validate(matrix)
        .and_then(|key| engine.decrypt(ciphertext, &key))
        .into()
}

pub fn generate_random_key(engine: &CipherEngine, size: usize) -> GenerateKeyResponse {
    match engine.generate_random_key(size) {
        Ok(key) => GenerateKeyResponse::Ok {
            key_matrix: key.into_rows(),
        },
        Err(e) => GenerateKeyResponse::Err {
            error: e.to_string(),
        },
    }
}
