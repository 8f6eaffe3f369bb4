//! # Text Codec
//!
//! Turns arbitrary text into alphabet indices and back. Anything that is not a Latin letter is
//! dropped without error; callers that need strict input must check the encoded length
//! themselves.

use crate::errors::HillCryptoError;
use crate::preset::alphabet::{PADDING_INDEX, index_of, letter_at};
use crate::ring::{Ring, Vector};

use itertools::Itertools;

/// Uppercases `text`, drops every character outside A-Z and maps the rest to `0..26`.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::encode;
/// assert_eq!(encode("Hello, World 42!"), vec![7, 4, 11, 11, 14, 22, 14, 17, 11, 3]);
/// assert!(encode("").is_empty());
/// ```
pub fn encode(text: &str) -> Vector {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter_map(index_of)
        .map(i64::from)
        .collect()
}

/// Maps numbers back to letters, reducing each one mod 26 first so that any integer decodes.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::decode;
/// assert_eq!(decode(&[3, 11, 29, -1]), "DLDZ");
/// ```
pub fn decode(numbers: &[i64]) -> String {
    let ring = Ring::ALPHABET;
    numbers
        .iter()
        .filter_map(|&n| letter_at(ring.normalize(n) as u8))
        .collect()
}

/// Appends 'X' (23) until the length is a multiple of `block_size`.
///
/// Input that is already aligned, the empty sequence included, is returned unchanged.
///
/// # Errors
///
/// Returns `HillCryptoError::InvalidParameters` if `block_size` is 0.
pub fn pad_to_block(numbers: &[i64], block_size: usize) -> Result<Vector, HillCryptoError> {
    if block_size == 0 {
        return Err(HillCryptoError::InvalidParameters(
            "block size must be > 0".into(),
        ));
    }

    let missing = (block_size - numbers.len() % block_size) % block_size;
    let mut padded = Vec::with_capacity(numbers.len() + missing);
    padded.extend_from_slice(numbers);
    padded.resize(numbers.len() + missing, PADDING_INDEX);
    Ok(padded)
}

/// Splits `numbers` into consecutive blocks of `block_size`.
///
/// Only full blocks are returned: a trailing partial block is left out.
///
/// # Errors
///
/// Returns `HillCryptoError::InvalidParameters` if `block_size` is 0.
pub fn blocks(numbers: &[i64], block_size: usize) -> Result<Vec<Vector>, HillCryptoError> {
    if block_size == 0 {
        return Err(HillCryptoError::InvalidParameters(
            "block size must be > 0".into(),
        ));
    }

    Ok(numbers
        .chunks_exact(block_size)
        .map(<[i64]>::to_vec)
        .collect_vec())
}

/// The letters an encryption actually sees: `decode(encode(text))`.
pub fn normalize_text(text: &str) -> String {
    decode(&encode(text))
}
