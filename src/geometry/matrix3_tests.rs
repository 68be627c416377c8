pub(crate) use super::*;

fn assert_near(expected: &Matrix3, actual: &Matrix3, tolerance: f64) {
    for row in 0..3 {
        for col in 0..3 {
            assert!(
                (expected[row][col] - actual[row][col]).abs() <= tolerance,
                "element ({row}, {col}): expected {}, got {}",
                expected[row][col],
                actual[row][col]
            );
        }
    }
}

#[test]
fn test_constants() {
    assert_eq!(Matrix3::IDENTITY.det(), 1.0);
    assert_eq!(Matrix3::ZERO.det(), 0.0);
    assert_eq!(Matrix3::ONES.det(), 0.0);
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(Matrix3::IDENTITY[i][j], expected);
            assert_eq!(Matrix3::ONES[i][j], 1.0);
        }
    }
}

#[test]
fn test_constructors_agree() {
    let from_values = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let from_rows = Matrix3::from_rows(
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(4.0, 5.0, 6.0),
        Vector3::new(7.0, 8.0, 9.0),
    );
    assert_eq!(from_values, from_rows);
}

#[test]
fn test_row_and_col() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    assert_eq!(m.row(1), Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(m.col(1), Vector3::new(2.0, 5.0, 8.0));
}

#[test]
fn test_transpose() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let t = m.transpose();
    assert_eq!(t, Matrix3::new(1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0));
    assert_eq!(t.transpose(), m);
}

#[test]
fn test_addition_and_subtraction() {
    let a = Matrix3::ONES;
    let b = Matrix3::IDENTITY;
    let sum = a + b;
    assert_eq!(sum[0][0], 2.0);
    assert_eq!(sum[0][1], 1.0);
    assert_eq!(sum - b, a);

    let mut c = a;
    c += b;
    assert_eq!(c, sum);
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn test_scalar_product_and_quotient() {
    let m = Matrix3::IDENTITY * 3.0;
    assert_eq!(m[0][0], 3.0);
    assert_eq!(m[1][0], 0.0);
    assert_eq!(3.0 * Matrix3::IDENTITY, m);
    assert_eq!(m / 3.0, Matrix3::IDENTITY);

    let mut n = Matrix3::IDENTITY;
    n *= 3.0;
    assert_eq!(n, m);
    n /= 3.0;
    assert_eq!(n, Matrix3::IDENTITY);
}

#[test]
fn test_matrix_product_identity_is_neutral() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 1.0, 6.0, 7.0, 8.0, 1.0);
    assert_eq!(m * Matrix3::IDENTITY, m);
    assert_eq!(Matrix3::IDENTITY * m, m);
}

#[test]
fn test_matrix_product() {
    let a = Matrix3::new(1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    let b = Matrix3::new(1.0, 0.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    let expected = Matrix3::new(7.0, 2.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    assert_eq!(a * b, expected);
}

#[test]
fn test_matrix_vector_product() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let v = Vector3::new(1.0, 0.0, -1.0);
    assert_eq!(m * v, Vector3::new(-2.0, -2.0, -2.0));
    assert_eq!(Matrix3::IDENTITY * v, v);
}

#[test]
fn test_det() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 1.0, 6.0, 7.0, 8.0, 1.0);
    assert_eq!(m.det(), 104.0);

    let singular = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    assert_eq!(singular.det(), 0.0);
}

#[test]
fn test_det_matches_dense_core() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 1.0, 6.0, 7.0, 8.0, 1.0);
    let dense = Matrix::from(m);
    assert_eq!(m.det(), dense.det().unwrap());
}

#[test]
fn test_inverse_round_trip() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 1.0, 6.0, 7.0, 8.0, 1.0);
    let inv = m.inverse().unwrap();
    assert_near(&Matrix3::IDENTITY, &(m * inv), 1e-3);
    assert_near(&Matrix3::IDENTITY, &(inv * m), 1e-3);
}

#[test]
fn test_inverse_singular() {
    let singular = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    assert_eq!(singular.inverse(), Err(MatrizError::Singular { det: 0.0 }));
}

#[test]
fn test_dense_conversions() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let dense = Matrix::from(m);
    assert_eq!(dense.shape(), (3, 3));
    assert_eq!(dense.elem(1, 2).unwrap(), 6.0);

    let back = Matrix3::try_from(&dense).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_try_from_rejects_wrong_shape() {
    let dense = Matrix::zeros(2, 3);
    assert!(matches!(
        Matrix3::try_from(&dense),
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_display() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.5);
    assert_eq!(
        m.to_string(),
        "[[1, 2, 3], [4, 5, 6], [7, 8, 9.5]]"
    );
}
