//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCryptoError;

use super::mod_inverse;

use serde::{Deserialize, Serialize};

/// Size of the Latin alphabet; every cipher operation works in Z_26.
pub const ALPHABET_MODULUS: u64 = 26;

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Ring::ALPHABET
    }
}

impl Ring {
    /// The ring Z_26 of the alphabet.
    pub const ALPHABET: Ring = Ring {
        modulus: ALPHABET_MODULUS,
    };

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// assert_eq!(Ring::ALPHABET.modulus(), 26);
    /// assert_eq!(Ring { modulus: 13 }.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::ALPHABET;
    /// assert_eq!(ring.normalize(29), 3);
    /// assert_eq!(ring.normalize(-8), 18);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::ALPHABET;
    /// assert_eq!(ring.add(20, 10), 4);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a) as i128;
        let b_norm = self.normalize(b) as i128;

        ((a_norm + b_norm) % self.modulus as i128) as i64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::ALPHABET;
    /// assert_eq!(ring.mul(3, 7), 21);
    /// assert_eq!(ring.mul(11, 19), 1);
    /// assert_eq!(ring.mul(-2, 6), 14);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        result as i64
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NoInverseExists` if `gcd(a, modulus) != 1`, `a ≡ 0` included.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::ALPHABET;
    /// assert_eq!(ring.inv(3).unwrap(), 9); // 27 = 1 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(13).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCryptoError> {
        mod_inverse(a, self.modulus as i64)
    }

    /// Whether `a` has a multiplicative inverse in this ring.
    pub fn is_unit(&self, a: i64) -> bool {
        super::gcd(self.normalize(a), self.modulus as i64) == 1
    }
}
