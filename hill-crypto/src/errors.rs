#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// The key is not square, or its determinant is not a unit mod 26.
    #[error("InvalidKeyMatrix: {0}")]
    InvalidKeyMatrix(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverseExists: {0}")]
    NoInverseExists(String),
    /// Ciphertext letter count is not a multiple of the block size.
    #[error("MalformedCiphertext: {length} letters do not split into blocks of {block_size}")]
    MalformedCiphertext { length: usize, block_size: usize },
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("CalculationOverflow: {0}")]
    CalculationOverflow(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
