//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_m, the extended Euclidean helpers
//! and the modular matrix operations the cipher is built on.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd, mod_inverse};
pub use math::{ALPHABET_MODULUS, Ring};
