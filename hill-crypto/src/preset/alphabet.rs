use lazy_static::lazy_static;
use std::collections::HashMap;

/// The 26 letters in cipher order; a letter's position is its numeric value.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numeric value of the padding letter 'X'.
pub const PADDING_INDEX: i64 = 23;

lazy_static! {
    /// A static HashMap mapping an index (0 to 25) to its uppercase letter (A-Z).
    pub static ref INDEX_TO_LETTER_MAP: HashMap<u8, char> = ALPHABET
        .chars()
        .enumerate()
        .map(|(i, ch)| (i as u8, ch))
        .collect();

    /// A static HashMap mapping an uppercase letter (A-Z) to its index (0 to 25).
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, u8> = INDEX_TO_LETTER_MAP
        .iter()
        .map(|(&index, &ch)| (ch, index))
        .collect();
}

/// The letter for an index already reduced into `0..26`.
pub fn letter_at(index: u8) -> Option<char> {
    INDEX_TO_LETTER_MAP.get(&index).copied()
}

/// The index of an uppercase letter, `None` for anything outside A-Z.
pub fn index_of(letter: char) -> Option<u8> {
    LETTER_TO_INDEX_MAP.get(&letter).copied()
}

/// The letter-to-number table in alphabet order (A = 0 … Z = 25).
pub fn character_mapping() -> Vec<(char, u8)> {
    ALPHABET
        .chars()
        .filter_map(|ch| index_of(ch).map(|index| (ch, index)))
        .collect()
}
