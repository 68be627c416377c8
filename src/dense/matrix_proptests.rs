//! Property tests for the dense matrix core.

use super::*;
use crate::error::MatrizError;
use proptest::prelude::*;

fn sample_matrix(rows: usize, cols: usize, seed: u32) -> Matrix {
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
        .collect();
    Matrix::from_vec(rows, cols, data).expect("generated data matches shape")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn prop_transpose_involution(
        rows in 1..=8usize,
        cols in 1..=8usize,
        seed in 0..500u32,
    ) {
        let a = sample_matrix(rows, cols, seed);
        let att = a.transpose().transpose();
        prop_assert_eq!(att, a);
    }

    #[test]
    fn prop_transpose_swaps_shape(
        rows in 0..=8usize,
        cols in 0..=8usize,
    ) {
        let a = Matrix::zeros(rows, cols);
        prop_assert_eq!(a.transpose().shape(), (cols, rows));
    }

    #[test]
    fn prop_matmul_shape(
        m in 1..=6usize,
        k in 1..=6usize,
        n in 1..=6usize,
        seed in 0..500u32,
    ) {
        let a = sample_matrix(m, k, seed);
        let b = sample_matrix(k, n, seed.wrapping_add(1));
        let c = a.matmul(&b).expect("inner dimensions agree");
        prop_assert_eq!(c.shape(), (m, n));
    }

    #[test]
    fn prop_identity_product_is_neutral(
        n in 1..=6usize,
        seed in 0..500u32,
    ) {
        let a = sample_matrix(n, n, seed);
        let eye = Matrix::identity(n);
        let left = eye.matmul(&a).expect("shapes agree");
        let right = a.matmul(&eye).expect("shapes agree");
        for i in 0..n {
            for j in 0..n {
                prop_assert!((left[(i, j)] - a[(i, j)]).abs() < 1e-9);
                prop_assert!((right[(i, j)] - a[(i, j)]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_scalar_forms_bit_identical(
        rows in 1..=5usize,
        cols in 1..=5usize,
        seed in 0..500u32,
        scalar in -100.0..100.0f64,
    ) {
        let m = sample_matrix(rows, cols, seed);
        prop_assert_eq!(scalar + &m, &m + scalar);
        prop_assert_eq!(scalar * &m, &m * scalar);
        prop_assert_eq!(scalar - &m, (&m - scalar) * -1.0);
    }

    #[test]
    fn prop_add_sub_round_trip(
        rows in 1..=5usize,
        cols in 1..=5usize,
        seed in 0..500u32,
    ) {
        let a = sample_matrix(rows, cols, seed);
        let b = sample_matrix(rows, cols, seed.wrapping_add(7));
        let back = a.add(&b).expect("same shape").sub(&b).expect("same shape");
        for i in 0..rows {
            for j in 0..cols {
                prop_assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_mismatched_shapes_are_rejected(
        rows in 1..=5usize,
        cols in 1..=5usize,
    ) {
        let a = Matrix::zeros(rows, cols);
        let b = Matrix::zeros(rows + 1, cols);
        prop_assert!(matches!(a.add(&b), Err(MatrizError::DimensionMismatch { .. })));
        prop_assert!(matches!(a.sub(&b), Err(MatrizError::DimensionMismatch { .. })));

        let c = Matrix::zeros(cols + 1, rows);
        prop_assert!(matches!(a.matmul(&c), Err(MatrizError::DimensionMismatch { .. })));
    }

    #[test]
    fn prop_det_of_transpose_matches(
        n in 1..=4usize,
        seed in 0..500u32,
    ) {
        let a = sample_matrix(n, n, seed);
        let d = a.det().expect("square");
        let dt = a.transpose().det().expect("square");
        prop_assert!((d - dt).abs() < 1e-6 * d.abs().max(1.0));
    }

    #[test]
    fn prop_inverse_round_trip(
        n in 1..=4usize,
        seed in 0..500u32,
    ) {
        // Sampled matrices are effectively never exactly singular; skip the
        // rare ill-conditioned draw instead of failing it.
        let a = sample_matrix(n, n, seed);
        let det = a.det().expect("square");
        prop_assume!(det.abs() > 1e-6);

        let inv = a.inv().expect("nonzero determinant");
        let product = a.matmul(&inv).expect("shapes agree");
        let eye = Matrix::identity(n);
        for i in 0..n {
            for j in 0..n {
                prop_assert!(
                    (product[(i, j)] - eye[(i, j)]).abs() < 1e-3,
                    "({}, {}) = {}", i, j, product[(i, j)]
                );
            }
        }
    }
}
