//! Key matrices shipped with the cipher.
//!
//! They are the defaults offered to users and the deterministic fallbacks of the random key
//! generator. Both are invertible mod 26 (determinants 11 and 441 ≡ 25).

/// `[[3, 2], [5, 7]]`, determinant 11.
pub const DEFAULT_KEY_2X2: [[i64; 2]; 2] = [[3, 2], [5, 7]];

/// `[[6, 24, 1], [13, 16, 10], [20, 17, 15]]` ("GYBNQKURP"), determinant 441.
pub const DEFAULT_KEY_3X3: [[i64; 3]; 3] = [[6, 24, 1], [13, 16, 10], [20, 17, 15]];

/// Identity with the first two diagonal entries set to 3 and 5.
///
/// The determinant is 15 (3 for n = 1), a unit mod 26, so the key is valid for every `n >= 1`.
pub fn perturbed_identity(n: usize) -> Vec<Vec<i64>> {
    let mut matrix = crate::ring::matrix_ops::identity_matrix(n);
    for (i, value) in [3, 5].into_iter().enumerate().take(n) {
        matrix[i][i] = value;
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::validator::is_valid;

    #[test]
    fn test_defaults_are_valid() {
        assert!(is_valid(&DEFAULT_KEY_2X2.iter().map(|r| r.to_vec()).collect()));
        assert!(is_valid(&DEFAULT_KEY_3X3.iter().map(|r| r.to_vec()).collect()));
    }

    #[test]
    fn test_perturbed_identity() {
        assert_eq!(perturbed_identity(1), vec![vec![3]]);
        assert_eq!(
            perturbed_identity(4),
            vec![
                vec![3, 0, 0, 0],
                vec![0, 5, 0, 0],
                vec![0, 0, 1, 0],
                vec![0, 0, 0, 1],
            ]
        );
        for n in 1..=8 {
            assert!(is_valid(&perturbed_identity(n)), "n = {}", n);
        }
    }
}
