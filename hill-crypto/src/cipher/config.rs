use crate::errors::HillCryptoError;
use crate::key::generator::DEFAULT_MAX_ATTEMPTS;

use serde::{Deserialize, Serialize};

/// What decryption does with ciphertext whose letter count is not a multiple of the block size.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingBlockPolicy {
    /// Drop the trailing partial block and decrypt the full blocks.
    #[default]
    Truncate,
    /// Fail with `HillCryptoError::MalformedCiphertext`.
    Reject,
}

/// Engine settings. Missing JSON fields take their default.
///
/// ```
/// # use hill_crypto::cipher::config::{CipherConfig, TrailingBlockPolicy};
/// let config = CipherConfig::from_json(r#"{"trailing_block": "reject"}"#).unwrap();
/// assert_eq!(config.trailing_block, TrailingBlockPolicy::Reject);
/// assert_eq!(config.max_key_attempts, 100);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    pub trailing_block: TrailingBlockPolicy,
    /// Random candidates drawn by key generation before it falls back to a fixed key.
    pub max_key_attempts: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            trailing_block: TrailingBlockPolicy::default(),
            max_key_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CipherConfig {
    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_trailing_block(mut self, policy: TrailingBlockPolicy) -> Self {
        self.trailing_block = policy;
        self
    }

    pub fn with_max_key_attempts(mut self, attempts: usize) -> Self {
        self.max_key_attempts = attempts;
        self
    }
}
