//! Hill cipher over the 26-letter Latin alphabet.
//!
//! Text is encoded as numbers (A = 0 … Z = 25), split into blocks of the key size and each block
//! is multiplied by the key matrix mod 26. Decryption uses the key's inverse mod 26, which exists
//! exactly when `gcd(det(key) mod 26, 26) == 1`.

pub mod api;
pub mod cipher;
pub mod codec;
pub mod errors;
pub mod key;
pub mod preset;
pub mod ring;

pub use cipher::{CipherConfig, CipherEngine, TrailingBlockPolicy};
pub use errors::HillCryptoError;
pub use key::KeyMatrix;
