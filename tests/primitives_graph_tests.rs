//! Tests for the simple undirected `Graph`.
//!
//! ## Test Organization
//!
//! 1. **Validation** - Node range, self-loops, duplicate edges
//! 2. **Reference Graphs** - path, cycle, complete, star, grid
//! 3. **Adjacency Round Trip** - `from_adjacency`
//! 4. **Accessors** - degrees and neighbours

use glpca_rs::prelude::*;

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_new_accepts_simple_graph() {
    let g = Graph::new(3, vec![(0, 1), (2, 1)]).unwrap();
    assert_eq!(g.n_nodes(), 3);
    assert_eq!(g.n_edges(), 2);
    // Orientation is preserved as given
    assert_eq!(g.edges(), &[(0, 1), (2, 1)]);
}

#[test]
fn test_new_rejects_out_of_range_node() {
    let err = Graph::new(3, vec![(0, 3)]).unwrap_err();
    assert_eq!(err, GlpcaError::InvalidNode { node: 3, n_nodes: 3 });
}

#[test]
fn test_new_rejects_self_loop() {
    let err = Graph::new(3, vec![(0, 1), (2, 2)]).unwrap_err();
    assert_eq!(err, GlpcaError::SelfLoop(2));
}

#[test]
fn test_new_rejects_duplicate_edge_in_either_orientation() {
    let err = Graph::new(3, vec![(0, 1), (1, 0)]).unwrap_err();
    assert_eq!(err, GlpcaError::DuplicateEdge { u: 1, v: 0 });

    let err = Graph::new(3, vec![(1, 2), (1, 2)]).unwrap_err();
    assert_eq!(err, GlpcaError::DuplicateEdge { u: 1, v: 2 });
}

#[test]
fn test_new_accepts_many_edges() {
    let n = 400;
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (j, i)))
        .collect();
    let m = edges.len();
    let g = Graph::new(n, edges.clone()).unwrap();
    assert_eq!(g.n_edges(), m);
    assert!(g.degrees().iter().all(|&d| d == n - 1));

    let mut repeated = edges;
    repeated.push((0, n - 1));
    assert_eq!(
        Graph::new(n, repeated).unwrap_err(),
        GlpcaError::DuplicateEdge { u: 0, v: n - 1 }
    );
}

#[test]
fn test_new_allows_isolated_nodes_and_empty_graph() {
    let g = Graph::new(4, vec![(0, 1)]).unwrap();
    assert_eq!(g.degrees(), vec![1, 1, 0, 0]);

    let empty = Graph::new(0, vec![]).unwrap();
    assert_eq!(empty.n_nodes(), 0);
    assert_eq!(empty.n_edges(), 0);
}

// ============================================================================
// Reference Graph Tests
// ============================================================================

#[test]
fn test_path_graph() {
    let g = Graph::path(4);
    assert_eq!(g.edges(), &[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(g.degrees(), vec![1, 2, 2, 1]);

    assert_eq!(Graph::path(1).n_edges(), 0);
    assert_eq!(Graph::path(0).n_nodes(), 0);
}

#[test]
fn test_cycle_graph() {
    let g = Graph::cycle(5);
    assert_eq!(g.n_edges(), 5);
    assert!(g.degrees().iter().all(|&d| d == 2));
    assert!(g.edges().contains(&(4, 0)));

    // Two nodes cannot close a simple cycle
    assert_eq!(Graph::cycle(2).edges(), &[(0, 1)]);
}

#[test]
fn test_complete_graph() {
    let g = Graph::complete(5);
    assert_eq!(g.n_edges(), 10);
    assert!(g.degrees().iter().all(|&d| d == 4));
}

#[test]
fn test_star_graph() {
    let g = Graph::star(5);
    assert_eq!(g.degrees(), vec![4, 1, 1, 1, 1]);
    assert_eq!(g.neighbors(0), vec![1, 2, 3, 4]);
    assert_eq!(g.neighbors(3), vec![0]);
}

#[test]
fn test_grid_graph() {
    let g = Graph::grid(2, 3);
    assert_eq!(g.n_nodes(), 6);
    // 2 rows x 2 horizontal + 3 vertical
    assert_eq!(g.n_edges(), 7);
    assert_eq!(g.degrees(), vec![2, 3, 2, 2, 3, 2]);

    let mut n4 = g.neighbors(4);
    n4.sort();
    assert_eq!(n4, vec![1, 3, 5]);
}

// ============================================================================
// Adjacency Round Trip Tests
// ============================================================================

#[test]
fn test_from_adjacency_recovers_edges() {
    let g = Graph::grid(3, 3);
    let a = GraphMatrices::<f64>::from_graph(&g).adjacency;
    let back = Graph::from_adjacency(&a).unwrap();

    assert_eq!(back.n_nodes(), 9);
    assert_eq!(back.n_edges(), g.n_edges());
    assert_eq!(back.degrees(), g.degrees());
    assert!(back.edges().iter().all(|&(u, v)| u < v));
}

#[test]
fn test_from_adjacency_treats_weights_as_edges() {
    let a = DMatrix::from_row_slice(3, 3, &[0.0, 0.5, 0.0, 0.5, 0.0, 2.0, 0.0, 2.0, 0.0]);
    let g = Graph::from_adjacency(&a).unwrap();
    assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
}

#[test]
fn test_from_adjacency_rejects_invalid_matrices() {
    let rect = DMatrix::<f64>::zeros(2, 3);
    assert_eq!(
        Graph::from_adjacency(&rect).unwrap_err(),
        GlpcaError::NotSquare { rows: 2, cols: 3 }
    );

    let looped = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 0.0]);
    assert_eq!(
        Graph::from_adjacency(&looped).unwrap_err(),
        GlpcaError::SelfLoop(0)
    );

    let asym = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
    assert_eq!(
        Graph::from_adjacency(&asym).unwrap_err(),
        GlpcaError::NotSymmetric { row: 0, col: 1 }
    );
}
