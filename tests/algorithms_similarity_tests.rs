//! Tests for kNN similarity graphs.
//!
//! ## Test Organization
//!
//! 1. **Structure** - symmetry, zero diagonal, neighbour counts
//! 2. **Kernels** - binary and heat weights
//! 3. **Symmetrization** - union against mutual
//! 4. **Metrics** - non-Euclidean neighbour choices
//! 5. **Validation** - invalid parameters and data

use approx::assert_relative_eq;
use glpca_rs::prelude::*;

/// Samples on a line at positions 0, 1, 2, 3, 10 (one feature).
fn line_with_outlier() -> DMatrix<f64> {
    DMatrix::from_row_slice(1, 5, &[0.0, 1.0, 2.0, 3.0, 10.0])
}

// ============================================================================
// Structure Tests
// ============================================================================

#[test]
fn test_knn_graph_is_symmetric_with_zero_diagonal() {
    let x = DMatrix::from_fn(2, 10, |i, j| ((i + 2) * j * j) as f64 % 7.0);
    let w = KnnGraph::new(3).build(&x).unwrap();

    assert_eq!(w.shape(), (10, 10));
    for i in 0..10 {
        assert_eq!(w[(i, i)], 0.0);
        for j in 0..10 {
            assert_eq!(w[(i, j)], w[(j, i)]);
        }
    }
}

#[test]
fn test_union_gives_at_least_k_neighbours() {
    let x = DMatrix::from_fn(3, 12, |i, j| ((i * 5 + j * 3) % 11) as f64);
    let k = 4;
    let w = KnnGraph::new(k).build(&x).unwrap();

    for i in 0..12 {
        let degree = (0..12).filter(|&j| w[(i, j)] > 0.0).count();
        assert!(degree >= k, "node {} has {} neighbours", i, degree);
    }
}

#[test]
fn test_nearest_neighbours_on_a_line() {
    let w = KnnGraph::new(1).build(&line_with_outlier()).unwrap();

    // 0 -> 1, 1 -> 0 (tie with 2 broken by index), 2 -> 1, 3 -> 2, 10 -> 3
    let expected = [(0, 1), (1, 2), (2, 3), (3, 4)];
    for i in 0..5 {
        for j in (i + 1)..5 {
            let linked = expected.contains(&(i, j));
            assert_eq!(w[(i, j)] > 0.0, linked, "edge ({}, {})", i, j);
        }
    }
}

// ============================================================================
// Kernel Tests
// ============================================================================

#[test]
fn test_binary_kernel_weights_are_one() {
    let w = KnnGraph::new(2).kernel(Binary).build(&line_with_outlier()).unwrap();
    assert!(w.iter().all(|&v| v == 0.0 || v == 1.0));
}

#[test]
fn test_heat_kernel_weights() {
    let t = 2.0;
    let w = KnnGraph::new(1).kernel(Heat(t)).build(&line_with_outlier()).unwrap();

    assert_relative_eq!(w[(0, 1)], (-1.0f64 / t).exp());
    assert_relative_eq!(w[(3, 4)], (-49.0f64 / t).exp());
}

// ============================================================================
// Symmetrization Tests
// ============================================================================

#[test]
fn test_mutual_is_subset_of_union() {
    let x = line_with_outlier();
    let union = KnnGraph::new(1).symmetrization(Union).build(&x).unwrap();
    let mutual = KnnGraph::new(1).symmetrization(Mutual).build(&x).unwrap();

    for i in 0..5 {
        for j in 0..5 {
            assert!(mutual[(i, j)] <= union[(i, j)]);
        }
    }
    // 10 picks 3 but 3 picks 2: not mutual
    assert!(union[(3, 4)] > 0.0);
    assert_eq!(mutual[(3, 4)], 0.0);
    // 0 and 1 pick each other
    assert!(mutual[(0, 1)] > 0.0);
}

// ============================================================================
// Metric Tests
// ============================================================================

#[test]
fn test_metric_changes_neighbours() {
    // Sample 0 at origin; 1 at (2, 2); 2 at (3, 0).
    // Euclidean: |01| = 2.83, |02| = 3.0 -> nearest is 1
    // Manhattan: |01| = 4.0, |02| = 3.0 -> nearest is 2
    // Chebyshev: |01| = 2.0, |02| = 3.0 -> nearest is 1
    let x = DMatrix::from_row_slice(2, 3, &[0.0, 2.0, 3.0, 0.0, 2.0, 0.0]);

    let we = KnnGraph::new(1).metric(Euclidean).build(&x).unwrap();
    let wm = KnnGraph::new(1).metric(Manhattan).build(&x).unwrap();
    let wc = KnnGraph::new(1).metric(Chebyshev).build(&x).unwrap();

    assert!(we[(0, 1)] > 0.0);
    assert_eq!(we[(0, 2)], 0.0);

    assert!(wm[(0, 2)] > 0.0);
    assert_eq!(wm[(0, 1)], 0.0);

    assert!(wc[(0, 1)] > 0.0);
    assert_eq!(wc[(0, 2)], 0.0);
}

#[test]
fn test_minkowski_two_matches_euclidean() {
    let x = DMatrix::from_fn(3, 8, |i, j| ((i + 1) * (j + 2)) as f64 % 5.0 + j as f64);
    let euclid = KnnGraph::new(2).metric(Euclidean).kernel(Heat(5.0)).build(&x).unwrap();
    let mink = KnnGraph::new(2).metric(Minkowski(2.0)).kernel(Heat(5.0)).build(&x).unwrap();

    for (a, b) in euclid.iter().zip(mink.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_invalid_neighbour_count() {
    let x = line_with_outlier();
    assert_eq!(
        KnnGraph::new(0).build(&x).unwrap_err(),
        GlpcaError::InvalidNeighbors { got: 0, max: 4 }
    );
    assert_eq!(
        KnnGraph::new(5).build(&x).unwrap_err(),
        GlpcaError::InvalidNeighbors { got: 5, max: 4 }
    );
}

#[test]
fn test_invalid_bandwidth() {
    let x = line_with_outlier();
    assert_eq!(
        KnnGraph::new(1).kernel(Heat(0.0)).build(&x).unwrap_err(),
        GlpcaError::InvalidBandwidth(0.0)
    );
    assert!(matches!(
        KnnGraph::new(1).kernel(Heat(f64::NAN)).build(&x),
        Err(GlpcaError::InvalidBandwidth(_))
    ));
}

#[test]
fn test_invalid_minkowski_order() {
    let x = line_with_outlier();
    assert!(matches!(
        KnnGraph::new(1).metric(Minkowski(0.5)).build(&x),
        Err(GlpcaError::InvalidInput(_))
    ));
}

#[test]
fn test_invalid_data() {
    let single = DMatrix::from_row_slice(2, 1, &[1.0, 2.0]);
    assert_eq!(
        KnnGraph::new(1).build(&single).unwrap_err(),
        GlpcaError::TooFewSamples { got: 1, min: 2 }
    );

    let with_nan = DMatrix::from_row_slice(1, 3, &[0.0, f64::NAN, 1.0]);
    assert!(matches!(
        KnnGraph::new(1).build(&with_nan),
        Err(GlpcaError::InvalidNumericValue(_))
    ));

    let empty = DMatrix::<f64>::zeros(0, 0);
    assert_eq!(KnnGraph::new(1).build(&empty).unwrap_err(), GlpcaError::EmptyInput);
}

#[test]
fn test_far_neighbour_keeps_its_edge() {
    // The outlier is 7 away from its nearest neighbour: exp(-4900) underflows
    let w = KnnGraph::new(1)
        .kernel(Heat(0.01))
        .build(&line_with_outlier())
        .unwrap();
    assert!(w[(4, 3)] > 0.0);
    assert_eq!(w[(4, 3)], w[(3, 4)]);
    assert!(w[(4, 3)] < w[(0, 1)]);
}

#[test]
fn test_default_knn_graph() {
    let knn = KnnGraph::<f64>::default();
    assert_eq!(knn.neighbors, 5);
    assert_eq!(knn.kernel, Binary);
    assert_eq!(knn.metric, Euclidean);
    assert_eq!(knn.symmetrization, Union);
}
