use crate::errors::HillCryptoError;

use num_integer::Integer;

/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}

/// Returns `x` in `[0, m)` with `a * x ≡ 1 (mod m)`.
///
/// # Errors
///
/// Returns `HillCryptoError::InvalidModulus` if `m <= 1`.
/// Returns `HillCryptoError::NoInverseExists` if `gcd(a mod m, m) != 1`.
///
/// # Example
///
/// ```
/// # use hill_crypto::ring::mod_inverse;
/// assert_eq!(mod_inverse(11, 26).unwrap(), 19);
/// assert_eq!(mod_inverse(-15, 26).unwrap(), 19); // -15 ≡ 11
/// assert!(mod_inverse(13, 26).is_err());
/// ```
pub fn mod_inverse(a: i64, m: i64) -> Result<i64, HillCryptoError> {
    if m <= 1 {
        return Err(HillCryptoError::InvalidModulus(format!(
            "Modulus must be greater than 1, got {}",
            m
        )));
    }

    let a_norm = a.mod_floor(&m);
    let (g, x, _) = extended_gcd(a_norm, m);
    if g != 1 {
        return Err(HillCryptoError::NoInverseExists(format!(
            "Modular inverse does not exist for {} mod {} (gcd={})",
            a_norm, m, g
        )));
    }

    Ok(x.mod_floor(&m))
}
