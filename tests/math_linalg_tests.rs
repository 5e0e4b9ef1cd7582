#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use nalgebra::DMatrix;

use glpca_rs::internals::math::centering::{center_rows, uncenter_rows};
use glpca_rs::internals::math::distance::DistanceMetric;
use glpca_rs::internals::math::kernel::SimilarityKernel;
use glpca_rs::internals::math::linalg::{
    fix_signs, largest_eigenvalue, max_asymmetry, quadratic_trace, symmetric_spectrum, FloatLinalg,
};

// ============================================================================
// Eigendecomposition Tests
// ============================================================================

#[test]
fn test_symmetric_eigen_sorted_ascending() {
    let m = DMatrix::from_row_slice(3, 3, &[4.0, 1.0, 0.0, 1.0, 3.0, 0.0, 0.0, 0.0, -2.0]);
    let (values, vectors) = f64::symmetric_eigen(&m).unwrap();

    assert_relative_eq!(values[0], -2.0, epsilon = 1e-12);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));

    // M v = λ v for every pair
    for (c, &lambda) in values.iter().enumerate() {
        let v = vectors.column(c).into_owned();
        let mv = &m * &v;
        for r in 0..3 {
            assert_relative_eq!(mv[r], lambda * v[r], epsilon = 1e-10);
        }
    }
}

#[test]
fn test_symmetric_eigen_f32() {
    let m = DMatrix::from_row_slice(2, 2, &[2.0f32, 1.0, 1.0, 2.0]);
    let (values, vectors) = f32::symmetric_eigen(&m).unwrap();
    assert_relative_eq!(values[0], 1.0, epsilon = 1e-5);
    assert_relative_eq!(values[1], 3.0, epsilon = 1e-5);
    // (1, 1) / √2 with a positive pivot
    assert!(vectors[(0, 1)] > 0.0 && vectors[(1, 1)] > 0.0);
}

#[test]
fn test_symmetric_spectrum_and_largest_eigenvalue() {
    let m = DMatrix::from_diagonal(&nalgebra::DVector::from_vec(vec![3.0, -1.0, 7.0]));
    let (values, _) = symmetric_spectrum(&m, "test").unwrap();
    assert_eq!(values.len(), 3);
    assert_relative_eq!(largest_eigenvalue(&m, "test").unwrap(), 7.0);
}

#[test]
fn test_fix_signs_makes_pivot_positive() {
    let mut v = DMatrix::from_row_slice(3, 2, &[0.1, 0.5, -0.9, -0.2, 0.3, -0.7]);
    fix_signs(&mut v);

    assert_relative_eq!(v[(1, 0)], 0.9);
    assert_relative_eq!(v[(0, 0)], -0.1);
    assert_relative_eq!(v[(2, 1)], 0.7);
    assert_relative_eq!(v[(0, 1)], -0.5);
}

// ============================================================================
// Helper Tests
// ============================================================================

#[test]
fn test_products_and_norm() {
    let a = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let ata = f64::tr_matmul(&a, &a);
    assert_eq!(ata.shape(), (3, 3));
    assert_relative_eq!(ata[(0, 0)], 17.0);
    assert_relative_eq!(ata[(1, 2)], 36.0);

    let aat = f64::matmul(&a, &a.transpose());
    assert_relative_eq!(aat[(0, 1)], 32.0);

    assert_relative_eq!(f64::frobenius_norm(&a), 91.0f64.sqrt());
}

#[test]
fn test_quadratic_trace() {
    let m = DMatrix::from_row_slice(2, 2, &[2.0, -1.0, -1.0, 2.0]);
    let identity = DMatrix::<f64>::identity(2, 2);
    assert_relative_eq!(quadratic_trace(&identity, &m), 4.0);

    let q = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
    assert_relative_eq!(quadratic_trace(&q, &m), 2.0);
}

#[test]
fn test_max_asymmetry() {
    let m = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.5, 0.0]);
    assert_relative_eq!(max_asymmetry(&m), 0.5);
    assert_relative_eq!(max_asymmetry(&DMatrix::<f64>::identity(3, 3)), 0.0);
}

// ============================================================================
// Centering Tests
// ============================================================================

#[test]
fn test_center_rows() {
    let x = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 10.0, 10.0, 40.0]);
    let (c, means) = center_rows(&x);

    assert_eq!(means, vec![2.0, 20.0]);
    assert_relative_eq!(c[(0, 0)], -1.0);
    assert_relative_eq!(c[(1, 2)], 20.0);
    for i in 0..2 {
        assert_relative_eq!(c.row(i).sum(), 0.0, epsilon = 1e-12);
    }

    assert_eq!(uncenter_rows(&c, &means), x);
}

// ============================================================================
// Distance and Kernel Tests
// ============================================================================

#[test]
fn test_distances_between_columns() {
    // Columns (0, 0) and (3, 4)
    let x = DMatrix::from_row_slice(2, 2, &[0.0, 3.0, 0.0, 4.0]);

    assert_relative_eq!(DistanceMetric::Euclidean.between_columns(&x, 0, 1), 5.0);
    assert_relative_eq!(DistanceMetric::Manhattan.between_columns(&x, 0, 1), 7.0);
    assert_relative_eq!(DistanceMetric::Chebyshev.between_columns(&x, 0, 1), 4.0);
    assert_relative_eq!(
        DistanceMetric::Minkowski(3.0).between_columns(&x, 0, 1),
        91.0f64.powf(1.0 / 3.0),
        epsilon = 1e-12
    );
}

#[test]
fn test_pairwise_distances() {
    let x = DMatrix::from_row_slice(1, 3, &[0.0, 1.0, 4.0]);
    let d = DistanceMetric::Euclidean.pairwise(&x);

    assert_eq!(d.shape(), (3, 3));
    assert_eq!(d[(0, 0)], 0.0);
    assert_relative_eq!(d[(0, 2)], 4.0);
    assert_relative_eq!(d[(2, 1)], 3.0);
    assert_eq!(d, d.transpose());
}

#[test]
fn test_similarity_kernels() {
    assert_eq!(SimilarityKernel::<f64>::Binary.weight(123.0), 1.0);

    let heat = SimilarityKernel::Heat(2.0);
    assert_relative_eq!(heat.weight(0.0), 1.0);
    assert_relative_eq!(heat.weight(2.0), (-2.0f64).exp());
    assert!(heat.weight(10.0) < heat.weight(1.0));

    // exp(-5e5) underflows; the weight stays the smallest positive value
    assert_eq!(heat.weight(1e3), f64::MIN_POSITIVE);
    assert_eq!(SimilarityKernel::Heat(1e-3f32).weight(5.0), f32::MIN_POSITIVE);
}
