//! Key validity: a key is usable iff it is square and `gcd(det mod 26, 26) == 1`.

use crate::errors::HillCryptoError;
use crate::key::KeyMatrix;
use crate::ring::matrix_ops::{determinant, reduce_bigint};
use crate::ring::{Matrix, Ring, gcd};

use num_bigint::BigInt;

/// Determinant facts behind a validity verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub determinant: BigInt,
    pub determinant_mod: i64,
    pub gcd: i64,
    pub valid: bool,
}

impl KeyReport {
    pub fn for_key(key: &KeyMatrix) -> Result<Self, HillCryptoError> {
        let ring = Ring::ALPHABET;
        let determinant = determinant(key.rows())?;
        let determinant_mod = reduce_bigint(&determinant, &ring)?;

        Ok(Self {
            gcd: gcd(determinant_mod, ring.modulus() as i64),
            valid: ring.is_unit(determinant_mod),
            determinant,
            determinant_mod,
        })
    }
}

/// `false` if `matrix` is empty or not square, otherwise whether its determinant is a unit mod 26.
pub fn is_valid(matrix: &Matrix) -> bool {
    validate(matrix).is_ok()
}

/// Checks `matrix` and returns it as a trusted [`KeyMatrix`].
///
/// # Errors
///
/// Returns `HillCryptoError::InvalidKeyMatrix` with the reason: the shape problem, or the
/// determinant and the factor it shares with 26.
pub fn validate(matrix: &Matrix) -> Result<KeyMatrix, HillCryptoError> {
    let key = KeyMatrix::try_with(matrix.clone())?;
    ensure_valid(&key)?;
    Ok(key)
}

/// Rejects a key whose determinant is not invertible mod 26.
pub fn ensure_valid(key: &KeyMatrix) -> Result<(), HillCryptoError> {
    let report = KeyReport::for_key(key)?;
    if report.valid {
        return Ok(());
    }

    Err(HillCryptoError::InvalidKeyMatrix(format!(
        "not invertible mod 26: determinant {} ≡ {} (mod 26) and gcd({}, 26) = {}",
        report.determinant, report.determinant_mod, report.determinant_mod, report.gcd
    )))
}
