//! Simple undirected graphs stored as oriented edge lists.
//!
//! ## Purpose
//!
//! This module provides the `Graph` type consumed by the graph-matrix
//! builders. A graph is a node count plus a list of edges; each edge is
//! stored with the orientation it was given, which fixes the sign pattern
//! of the incidence matrix.
//!
//! ## Invariants
//!
//! * Every endpoint is `< n_nodes`.
//! * No self-loops and no repeated unordered pair.
//!
//! ## Non-goals
//!
//! * Multigraphs, directed graphs and edge weights (use a similarity matrix).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeSet, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeSet, vec::Vec};

use nalgebra::DMatrix;
use num_traits::Float;

use crate::primitives::errors::GlpcaError;

/// A simple undirected graph with oriented edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n_nodes: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Build a graph from `n_nodes` and a list of edges `(u, v)`, oriented `u -> v`.
    pub fn new(n_nodes: usize, edges: Vec<(usize, usize)>) -> Result<Self, GlpcaError> {
        let mut seen = BTreeSet::new();

        for &(u, v) in &edges {
            for node in [u, v] {
                if node >= n_nodes {
                    return Err(GlpcaError::InvalidNode { node, n_nodes });
                }
            }
            if u == v {
                return Err(GlpcaError::SelfLoop(u));
            }
            if !seen.insert((u.min(v), u.max(v))) {
                return Err(GlpcaError::DuplicateEdge { u, v });
            }
        }

        Ok(Self { n_nodes, edges })
    }

    /// Build a graph from a symmetric adjacency matrix with zero diagonal.
    ///
    /// Any non-zero entry above the diagonal becomes an edge `(i, j)` with `i < j`.
    pub fn from_adjacency<T: Float + nalgebra::Scalar>(
        adjacency: &DMatrix<T>,
    ) -> Result<Self, GlpcaError> {
        let (rows, cols) = adjacency.shape();
        if rows != cols {
            return Err(GlpcaError::NotSquare { rows, cols });
        }

        let mut edges = Vec::new();
        for i in 0..rows {
            if adjacency[(i, i)] != T::zero() {
                return Err(GlpcaError::SelfLoop(i));
            }
            for j in (i + 1)..cols {
                let a = adjacency[(i, j)];
                if a != adjacency[(j, i)] {
                    return Err(GlpcaError::NotSymmetric { row: i, col: j });
                }
                if a != T::zero() {
                    edges.push((i, j));
                }
            }
        }

        Self::new(rows, edges)
    }

    /// Path graph `0 - 1 - ... - (n-1)`.
    pub fn path(n: usize) -> Self {
        let edges = (1..n).map(|i| (i - 1, i)).collect();
        Self { n_nodes: n, edges }
    }

    /// Cycle graph on `n` nodes (a path for `n < 3`).
    pub fn cycle(n: usize) -> Self {
        let mut graph = Self::path(n);
        if n >= 3 {
            graph.edges.push((n - 1, 0));
        }
        graph
    }

    /// Complete graph on `n` nodes.
    pub fn complete(n: usize) -> Self {
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j));
            }
        }
        Self { n_nodes: n, edges }
    }

    /// Star graph: node 0 joined to every other node.
    pub fn star(n: usize) -> Self {
        let edges = (1..n).map(|i| (0, i)).collect();
        Self { n_nodes: n, edges }
    }

    /// 4-connected `rows x cols` grid, nodes numbered row-major.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let mut edges = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                let node = r * cols + c;
                if c + 1 < cols {
                    edges.push((node, node + 1));
                }
                if r + 1 < rows {
                    edges.push((node, node + cols));
                }
            }
        }
        Self {
            n_nodes: rows * cols,
            edges,
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Number of edges.
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// Oriented edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Degree of every node.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.n_nodes];
        for &(u, v) in &self.edges {
            degrees[u] += 1;
            degrees[v] += 1;
        }
        degrees
    }

    /// Neighbours of `node`, in edge order.
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter_map(|&(u, v)| {
                if u == node {
                    Some(v)
                } else if v == node {
                    Some(u)
                } else {
                    None
                }
            })
            .collect()
    }
}
