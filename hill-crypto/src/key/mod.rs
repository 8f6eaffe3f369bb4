//! # Key Module
//!
//! [`KeyMatrix`] is the trusted square key type. Loose `Matrix` input from callers is turned into
//! a `KeyMatrix` at the boundary; invertibility mod 26 is checked by [`validator`] before every
//! use.

pub mod generator;
pub mod validator;

use crate::errors::HillCryptoError;
use crate::preset::default_keys::{DEFAULT_KEY_2X2, DEFAULT_KEY_3X3};
use crate::ring::matrix_ops::{determinant, modular_inverse_matrix, square_size};
use crate::ring::{Matrix, Ring};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use std::fmt;

/// A non-empty square integer matrix used as a Hill key.
///
/// Entries are not range-checked: any integer is accepted and reduced mod 26 where arithmetic
/// needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Matrix", into = "Matrix")]
pub struct KeyMatrix {
    rows: Matrix,
}

impl KeyMatrix {
    /// Wraps `rows` after checking the shape only (non-empty and square).
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidKeyMatrix` for an empty, ragged or non-square matrix.
    pub fn try_with(rows: Matrix) -> Result<Self, HillCryptoError> {
        if rows.is_empty() {
            return Err(HillCryptoError::InvalidKeyMatrix(
                "key matrix must not be empty".into(),
            ));
        }
        square_size(&rows).map_err(|e| match e {
            HillCryptoError::DimensionMismatch(reason) => HillCryptoError::InvalidKeyMatrix(reason),
            other => other,
        })?;

        Ok(Self { rows })
    }

    /// `[[3, 2], [5, 7]]`.
    pub fn default_2x2() -> Self {
        Self {
            rows: DEFAULT_KEY_2X2.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// `[[6, 24, 1], [13, 16, 10], [20, 17, 15]]`.
    pub fn default_3x3() -> Self {
        Self {
            rows: DEFAULT_KEY_3X3.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Side length, which is also the cipher block size.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &Matrix {
        &self.rows
    }

    pub fn into_rows(self) -> Matrix {
        self.rows
    }

    /// Exact integer determinant.
    pub fn determinant(&self) -> Result<BigInt, HillCryptoError> {
        determinant(&self.rows)
    }

    /// `det⁻¹ · adj(K) mod 26`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NoInverseExists` when the key is not invertible mod 26.
    pub fn inverse(&self) -> Result<Matrix, HillCryptoError> {
        modular_inverse_matrix(&self.rows, &Ring::ALPHABET)
    }
}

impl TryFrom<Matrix> for KeyMatrix {
    type Error = HillCryptoError;

    fn try_from(rows: Matrix) -> Result<Self, Self::Error> {
        Self::try_with(rows)
    }
}

impl From<KeyMatrix> for Matrix {
    fn from(key: KeyMatrix) -> Self {
        key.rows
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .flatten()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", v, width = width)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
