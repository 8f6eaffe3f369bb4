use crate::errors::HillCryptoError;
use crate::ring::{Matrix, Ring, Vector};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// Maps each element of a matrix using the provided mapping function.
pub fn map_matrix(matrix: &Matrix, mapper: &dyn Fn(i64) -> i64) -> Matrix {
    matrix
        .iter()
        .map(|row| row.iter().map(|&val| mapper(val)).collect())
        .collect()
}

/// Returns the side length of a square matrix.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if any row length differs from the row count.
pub fn square_size(matrix: &Matrix) -> Result<usize, HillCryptoError> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "matrix must be square: row {} has length {} but there are {} rows",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// Entrywise reduction into `[0, m)`, negative entries included.
pub fn reduce_mod(matrix: &Matrix, ring: &Ring) -> Matrix {
    map_matrix(matrix, &|val| ring.normalize(val))
}

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, HillCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
        y[i] = row
            .iter()
            .zip(x)
            .fold(0i64, |sum, (&a_ij, &x_j)| ring.add(sum, ring.mul(a_ij, x_j)));
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn multiply_mod(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    let p = b.first().map_or(0, |row| row.len()); // cols in B

    for (k, row) in b.iter().enumerate() {
        if row.len() != p {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix B row {} has incorrect length (expected {})",
                k, p
            )));
        }
    }

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            for k in 0..m_common {
                let term = ring.mul(a[i][k], b[k][j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    for (i, row) in identity.iter_mut().enumerate() {
        row[i] = 1;
    }
    identity
}

/// Exact integer determinant of a square matrix.
///
/// Uses fraction-free (Bareiss) elimination: every intermediate division is exact, so the result
/// is the true determinant for any size, with no floating point and no overflow.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is not square.
///
/// # Example
///
/// ```
/// # use hill_crypto::ring::matrix_ops::determinant;
/// # use num_bigint::BigInt;
/// let det = determinant(&vec![vec![2, 4], vec![6, 8]]).unwrap();
/// assert_eq!(det, BigInt::from(-8));
/// ```
pub fn determinant(matrix: &Matrix) -> Result<BigInt, HillCryptoError> {
    let n = square_size(matrix)?;
    if n == 0 {
        return Ok(BigInt::one());
    }

    let mut a: Vec<Vec<BigInt>> = matrix
        .iter()
        .map(|row| row.iter().map(|&v| BigInt::from(v)).collect())
        .collect();
    let mut negate = false;
    let mut prev_pivot = BigInt::one();

    for k in 0..n - 1 {
        if a[k][k].is_zero() {
            // swap in a row with a non-zero entry in this column
            match ((k + 1)..n).find(|&i| !a[i][k].is_zero()) {
                Some(i) => {
                    a.swap(k, i);
                    negate = !negate;
                }
                None => return Ok(BigInt::zero()),
            }
        }
        for i in (k + 1)..n {
            for j in (k + 1)..n {
                let value = (&a[i][j] * &a[k][k] - &a[i][k] * &a[k][j]) / &prev_pivot;
                a[i][j] = value;
            }
        }
        prev_pivot = a[k][k].clone();
    }

    let det = a[n - 1][n - 1].clone();
    Ok(if negate { -det } else { det })
}

/// Determinant reduced into `[0, m)`.
pub fn determinant_mod(matrix: &Matrix, ring: &Ring) -> Result<i64, HillCryptoError> {
    reduce_bigint(&determinant(matrix)?, ring)
}

/// Reduces an exact integer (a determinant or cofactor) into `[0, m)`.
pub fn reduce_bigint(value: &BigInt, ring: &Ring) -> Result<i64, HillCryptoError> {
    let modulus = BigInt::from(ring.modulus());

    value.mod_floor(&modulus).to_i64().ok_or_else(|| {
        HillCryptoError::CalculationOverflow(format!(
            "residue mod {} does not fit i64",
            ring.modulus()
        ))
    })
}

/// The matrix with row `row` and column `col` removed.
fn minor(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

fn checked_neg(value: i64) -> Result<i64, HillCryptoError> {
    value.checked_neg().ok_or_else(|| {
        HillCryptoError::CalculationOverflow(format!("cannot negate {} in i64", value))
    })
}

/// Adjugate (transposed cofactor matrix) over the integers.
///
/// 2×2 matrices use the closed form `[[d, -b], [-c, a]]`; larger ones take exact minor
/// determinants, so `M · adj(M) = det(M) · I` holds exactly.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is not square and
/// `HillCryptoError::CalculationOverflow` if a cofactor does not fit in an `i64`.
pub fn adjugate(matrix: &Matrix) -> Result<Matrix, HillCryptoError> {
    let n = square_size(matrix)?;
    match n {
        0 => Ok(Matrix::new()),
        1 => Ok(vec![vec![1]]),
        2 => {
            let (a, b) = (matrix[0][0], matrix[0][1]);
            let (c, d) = (matrix[1][0], matrix[1][1]);
            Ok(vec![vec![d, checked_neg(b)?], vec![checked_neg(c)?, a]])
        }
        _ => {
            let mut adj = vec![vec![0i64; n]; n];
            for i in 0..n {
                for j in 0..n {
                    let cofactor = cofactor(matrix, i, j)?;
                    adj[j][i] = cofactor.to_i64().ok_or_else(|| {
                        HillCryptoError::CalculationOverflow(format!(
                            "cofactor ({}, {}) = {} does not fit i64",
                            i, j, cofactor
                        ))
                    })?;
                }
            }
            Ok(adj)
        }
    }
}

/// Signed minor `(-1)^(row + col) · det(minor)`, exact.
fn cofactor(matrix: &Matrix, row: usize, col: usize) -> Result<BigInt, HillCryptoError> {
    let det = determinant(&minor(matrix, row, col))?;
    Ok(if (row + col) % 2 == 1 { -det } else { det })
}

/// Adjugate with every cofactor reduced mod `m` while still exact.
///
/// Cofactors of a large key outgrow `i64` long before the key outgrows anything else.
fn adjugate_mod(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = square_size(matrix)?;
    if n <= 2 {
        return Ok(reduce_mod(&adjugate(matrix)?, ring));
    }

    let mut adj = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            adj[j][i] = reduce_bigint(&cofactor(matrix, i, j)?, ring)?;
        }
    }
    Ok(adj)
}

/// Inverse of a square matrix modulo `m`: `det⁻¹ · adj(M) mod m`.
///
/// The adjugate is taken of the reduced matrix; cofactors are polynomials in the entries, so this
/// agrees with the adjugate of `M` itself modulo `m`.
///
/// # Errors
///
/// Returns `HillCryptoError::NoInverseExists` if the determinant is not a unit mod `m`.
///
/// # Example
///
/// ```
/// # use hill_crypto::ring::{Ring, matrix_ops::modular_inverse_matrix};
/// let inv = modular_inverse_matrix(&vec![vec![3, 2], vec![5, 7]], &Ring::ALPHABET).unwrap();
/// assert_eq!(inv, vec![vec![3, 14], vec![9, 5]]);
/// ```
pub fn modular_inverse_matrix(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let det = determinant_mod(matrix, ring)?;
    let det_inv = ring.inv(det).map_err(|_| {
        HillCryptoError::NoInverseExists(format!(
            "determinant {} has no inverse mod {}",
            det,
            ring.modulus()
        ))
    })?;

    let adj = adjugate_mod(&reduce_mod(matrix, ring), ring)?;
    Ok(map_matrix(&adj, &|val| ring.mul(det_inv, val)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::key::generator::generate_random_key_with;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn alphabet() -> Ring {
        Ring::ALPHABET
    }

    /// Laplace expansion along the first row, for cross-checking.
    fn laplace(matrix: &Matrix) -> i128 {
        match matrix.len() {
            0 => 1,
            1 => matrix[0][0] as i128,
            n => (0..n)
                .map(|j| {
                    let sign = if j % 2 == 0 { 1 } else { -1 };
                    sign * matrix[0][j] as i128 * laplace(&minor(matrix, 0, j))
                })
                .sum(),
        }
    }

    fn plain_mul(a: &Matrix, b: &Matrix) -> Matrix {
        let n = a.len();
        let p = b[0].len();
        let mut c = vec![vec![0i64; p]; n];
        for i in 0..n {
            for j in 0..p {
                c[i][j] = (0..b.len()).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        c
    }

    #[test]
    fn test_matrix_vector_mul_ok() {
        let key = vec![vec![3, 2], vec![5, 7]];
        assert_eq!(matrix_vector_mul(&key, &vec![7, 4], &alphabet()).unwrap(), vec![3, 11]);
        assert_eq!(matrix_vector_mul(&key, &vec![14, 23], &alphabet()).unwrap(), vec![10, 23]);
    }

    #[test]
    fn test_matrix_vector_mul_dimension_mismatch() {
        let a = vec![vec![1, 2], vec![3, 4]];
        assert!(matrix_vector_mul(&a, &vec![5, 6, 7], &alphabet()).is_err());
        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matrix_vector_mul(&ragged, &vec![5, 6], &alphabet()).is_err());
    }

    #[test]
    fn test_multiply_mod_ok() {
        let ring = Ring { modulus: 13 };
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![5, 6], vec![7, 8]];
        assert_eq!(multiply_mod(&a, &b, &ring).unwrap(), vec![vec![6, 9], vec![4, 11]]);
    }

    #[test]
    fn test_multiply_mod_negative_entries() {
        let a = vec![vec![-1, 0], vec![0, -1]];
        let b = vec![vec![3, 2], vec![5, 7]];
        assert_eq!(
            multiply_mod(&a, &b, &alphabet()).unwrap(),
            vec![vec![23, 24], vec![21, 19]]
        );
    }

    #[test]
    fn test_multiply_mod_dimension_mismatch() {
        let ring = alphabet();
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![5, 6, 7], vec![8, 9, 10]];
        assert!(multiply_mod(&a, &b, &ring).is_ok());

        let f = vec![vec![1], vec![2], vec![3]];
        assert!(multiply_mod(&a, &f, &ring).is_err());

        let ragged = vec![vec![1, 2], vec![3]];
        assert!(multiply_mod(&a, &ragged, &ring).is_err());
    }

    #[test]
    fn test_reduce_mod() {
        let m = vec![vec![-1, 26, 27], vec![-27, 0, 52]];
        assert_eq!(reduce_mod(&m, &alphabet()), vec![vec![25, 0, 1], vec![25, 0, 0]]);
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(identity_matrix(3), vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
        assert_eq!(identity_matrix(0), Matrix::new());
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(determinant(&vec![vec![3, 2], vec![5, 7]]).unwrap(), BigInt::from(11));
        assert_eq!(
            determinant(&vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]).unwrap(),
            BigInt::from(441)
        );
        assert_eq!(determinant(&vec![vec![7]]).unwrap(), BigInt::from(7));
        assert_eq!(determinant(&Matrix::new()).unwrap(), BigInt::one());
    }

    #[test]
    fn test_determinant_needs_row_swap() {
        let m = vec![vec![0, 2, 1], vec![3, 0, 4], vec![1, 5, 0]];
        assert_eq!(determinant(&m).unwrap(), BigInt::from(23));
    }

    #[test]
    fn test_determinant_singular() {
        let m = vec![vec![1, 2, 3], vec![2, 4, 6], vec![0, 1, 1]];
        assert!(determinant(&m).unwrap().is_zero());
        let zero_col = vec![vec![0, 1], vec![0, 5]];
        assert!(determinant(&zero_col).unwrap().is_zero());
    }

    #[test]
    fn test_determinant_not_square() {
        assert!(matches!(
            determinant(&vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Err(HillCryptoError::DimensionMismatch(_))
        ));
        assert!(determinant(&vec![vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_determinant_matches_laplace() {
        let mut rng = StdRng::seed_from_u64(26);
        for n in 1..=6 {
            for _ in 0..20 {
                let m: Matrix = (0..n)
                    .map(|_| (0..n).map(|_| rng.random_range(-30..30)).collect())
                    .collect();
                assert_eq!(determinant(&m).unwrap(), BigInt::from(laplace(&m)), "{:?}", m);
            }
        }
    }

    #[test]
    fn test_determinant_mod() {
        let m = vec![vec![2, 4], vec![6, 8]];
        assert_eq!(determinant_mod(&m, &alphabet()).unwrap(), 18);
        let m = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        assert_eq!(determinant_mod(&m, &alphabet()).unwrap(), 25);
    }

    #[test]
    fn test_adjugate_closed_forms() {
        assert_eq!(
            adjugate(&vec![vec![3, 2], vec![5, 7]]).unwrap(),
            vec![vec![7, -2], vec![-5, 3]]
        );
        assert_eq!(adjugate(&vec![vec![9]]).unwrap(), vec![vec![1]]);
    }

    #[test]
    fn test_adjugate_3x3() {
        let m = vec![vec![0, 2, 1], vec![3, 0, 4], vec![1, 5, 0]];
        assert_eq!(
            adjugate(&m).unwrap(),
            vec![vec![-20, 5, 8], vec![4, -1, 3], vec![15, 2, -6]]
        );
    }

    #[test]
    fn test_adjugate_times_matrix_is_scaled_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 2..=5 {
            let m: Matrix = (0..n)
                .map(|_| (0..n).map(|_| rng.random_range(0..26)).collect())
                .collect();
            let det = laplace(&m) as i64;
            let expected = map_matrix(&identity_matrix(n), &|v| v * det);
            assert_eq!(plain_mul(&m, &adjugate(&m).unwrap()), expected);
        }
    }

    #[test]
    fn test_adjugate_overflow() {
        let m = vec![vec![i64::MIN, 0], vec![1, 1]];
        assert!(adjugate(&m).is_ok());
        let m = vec![vec![1, i64::MIN], vec![1, 1]];
        assert!(matches!(
            adjugate(&m),
            Err(HillCryptoError::CalculationOverflow(_))
        ));
    }

    #[test]
    fn test_modular_inverse_matrix_ok() {
        let ring = alphabet();
        let matrix = vec![vec![3, 3], vec![2, 5]];
        // det = 9, 9^-1 = 3, adj = [[5, 23], [24, 3]]
        let expected_inv = vec![vec![15, 17], vec![20, 9]];
        assert_eq!(modular_inverse_matrix(&matrix, &ring).unwrap(), expected_inv);

        let product = multiply_mod(&matrix, &expected_inv, &ring).unwrap();
        assert_eq!(product, identity_matrix(2));
    }

    #[test]
    fn test_modular_inverse_matrix_3x3_and_4x4() {
        let ring = alphabet();
        let key = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        assert_eq!(
            modular_inverse_matrix(&key, &ring).unwrap(),
            vec![vec![8, 5, 10], vec![21, 8, 21], vec![21, 12, 8]]
        );

        let key = vec![
            vec![2, 0, 1, 3],
            vec![1, 1, 0, 2],
            vec![4, 1, 3, 0],
            vec![0, 2, 1, 2],
        ];
        let inv = modular_inverse_matrix(&key, &ring).unwrap();
        assert_eq!(
            inv,
            vec![
                vec![16, 23, 19, 5],
                vec![4, 14, 1, 19],
                vec![12, 8, 18, 13],
                vec![3, 8, 16, 1],
            ]
        );
        assert_eq!(multiply_mod(&key, &inv, &ring).unwrap(), identity_matrix(4));
    }

    #[test]
    fn test_modular_inverse_matrix_large_entries() {
        let ring = alphabet();
        let key = vec![vec![3 + 26 * 1_000_000, 2 - 26], vec![5 + 52, 7]];
        assert_eq!(
            modular_inverse_matrix(&key, &ring).unwrap(),
            vec![vec![3, 14], vec![9, 5]]
        );
    }

    #[test]
    fn test_modular_inverse_matrix_singular() {
        let ring = alphabet();
        assert!(matches!(
            modular_inverse_matrix(&vec![vec![2, 4], vec![6, 8]], &ring),
            Err(HillCryptoError::NoInverseExists(_))
        ));
        // det = 13
        assert!(modular_inverse_matrix(&vec![vec![13, 0], vec![0, 1]], &ring).is_err());
    }

    #[test]
    fn test_modular_inverse_matrix_wide_keys() -> Result<(), HillCryptoError> {
        let ring = alphabet();
        let mut rng = StdRng::seed_from_u64(5);
        for n in [16, 20] {
            let key = generate_random_key_with(n, 1000, &mut rng)?;
            if n == 20 {
                // exact cofactors no longer fit i64
                assert!(matches!(
                    adjugate(key.rows()),
                    Err(HillCryptoError::CalculationOverflow(_))
                ));
            }
            let inv = modular_inverse_matrix(key.rows(), &ring)?;
            assert_eq!(multiply_mod(key.rows(), &inv, &ring)?, identity_matrix(n));
            assert_eq!(multiply_mod(&inv, key.rows(), &ring)?, identity_matrix(n));
        }
        Ok(())
    }

    #[test]
    fn test_reduce_bigint() {
        let ring = alphabet();
        assert_eq!(reduce_bigint(&BigInt::from(-8), &ring).unwrap(), 18);
        let huge: BigInt = "-35513384477044778899".parse().unwrap();
        let expected = (-35513384477044778899i128).rem_euclid(26) as i64;
        assert_eq!(reduce_bigint(&huge, &ring).unwrap(), expected);
    }
}
