//! Random key generation.

use crate::errors::HillCryptoError;
use crate::key::KeyMatrix;
use crate::key::validator::is_valid;
use crate::preset::default_keys::perturbed_identity;
use crate::ring::{ALPHABET_MODULUS, Matrix};

use log::{debug, warn};
use rand::Rng;

/// Number of random candidates tried before falling back to a fixed key.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Draws a random valid `n×n` key using the thread-local RNG.
pub fn generate_random_key(n: usize) -> Result<KeyMatrix, HillCryptoError> {
    generate_random_key_with(n, DEFAULT_MAX_ATTEMPTS, &mut rand::rng())
}

/// Samples `n×n` matrices with entries uniform in `0..26` until one is invertible mod 26.
///
/// After `max_attempts` misses the result is [`fallback_key`], so the function always returns a
/// valid key.
///
/// # Errors
///
/// Returns `HillCryptoError::InvalidParameters` if `n` is 0.
pub fn generate_random_key_with<R: Rng>(
    n: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<KeyMatrix, HillCryptoError> {
    if n == 0 {
        return Err(HillCryptoError::InvalidParameters(
            "key size must be > 0".into(),
        ));
    }

    for attempt in 1..=max_attempts {
        let candidate: Matrix = (0..n)
            .map(|_| {
                (0..n)
                    .map(|_| rng.random_range(0..ALPHABET_MODULUS as i64))
                    .collect()
            })
            .collect();

        if is_valid(&candidate) {
            debug!("generated {}x{} key after {} attempt(s)", n, n, attempt);
            return KeyMatrix::try_with(candidate);
        }
    }

    warn!(
        "no valid {}x{} key in {} attempts, using the fallback key",
        n, n, max_attempts
    );
    fallback_key(n)
}

/// The deterministic key used when sampling gives up: the default 2×2 and 3×3 keys, otherwise
/// the identity with diagonal entries 3 and 5.
pub fn fallback_key(n: usize) -> Result<KeyMatrix, HillCryptoError> {
    match n {
        2 => Ok(KeyMatrix::default_2x2()),
        3 => Ok(KeyMatrix::default_3x3()),
        _ => KeyMatrix::try_with(perturbed_identity(n)),
    }
}
