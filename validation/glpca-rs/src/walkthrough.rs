//! gLPCA Walkthrough
//!
//! This script walks through the building blocks of Graph-Laplacian PCA
//! and writes CSV data for visualization. It covers:
//! 1. Graph Matrices (A, D, B, L and their identities)
//! 2. Laplacian Spectrum (Fiedler vector and spectral bipartition)
//! 3. Discrete vs Continuous Laplacian (eigenvalues and second derivatives)
//! 4. Beta Sweep (from PCA to Laplacian embedding)

use glpca_rs::prelude::*;
use std::fs::File;
use std::io::Write;

const OUTPUT_DIR: &str = "../output/walkthrough/";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Running gLPCA Walkthrough...");
    println!("============================");
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    println!("Output directory: {}", OUTPUT_DIR);
    println!();

    run_graph_matrices()?;
    println!();

    run_laplacian_spectrum()?;
    println!();

    run_continuum_comparison()?;
    println!();

    run_beta_sweep()?;
    println!();

    println!("Walkthrough completed successfully.");
    Ok(())
}

fn print_matrix(name: &str, m: &DMatrix<f64>) {
    println!("{} ({}x{}):", name, m.nrows(), m.ncols());
    for i in 0..m.nrows() {
        let row: Vec<String> = m.row(i).iter().map(|v| format!("{:>5.1}", v)).collect();
        println!("  [{}]", row.join(" "));
    }
}

/// 1. Graph Matrices
fn run_graph_matrices() -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Graph Matrices");
    println!("-----------------");

    // House: a square with a roof
    let g = Graph::new(5, vec![(0, 1), (1, 2), (2, 3), (3, 0), (2, 4), (3, 4)])?;
    let m = GraphMatrices::<f64>::from_graph(&g);

    print_matrix("Adjacency A", &m.adjacency);
    print_matrix("Degree D", &m.degree);
    print_matrix("Incidence B", &m.incidence);
    print_matrix("Laplacian L", &m.laplacian);

    let report = m.verify()?;
    println!("||L - B B^T||_F   = {:.3e}", report.incidence_residual);
    println!("||L - (D - A)||_F = {:.3e}", report.degree_residual);
    println!("max row sum       = {:.3e}", report.max_row_sum);
    println!("min eigenvalue    = {:.3e}", report.min_eigenvalue);
    println!("Identities hold: {}", report.holds(1e-10));

    Ok(())
}

/// 2. Laplacian Spectrum
fn run_laplacian_spectrum() -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Laplacian Spectrum");
    println!("---------------------");

    // Barbell: two K4 joined by the bridge (3, 4)
    let mut edges = Vec::new();
    for offset in [0, 4] {
        for i in 0..4 {
            for j in (i + 1)..4 {
                edges.push((offset + i, offset + j));
            }
        }
    }
    edges.push((3, 4));
    let g = Graph::new(8, edges)?;

    let spectrum = GraphMatrices::<f64>::from_graph(&g).spectrum()?;
    let eigenvalues: Vec<String> = spectrum
        .eigenvalues
        .iter()
        .map(|v| format!("{:.4}", v))
        .collect();
    println!("Eigenvalues: [{}]", eigenvalues.join(", "));
    println!(
        "Connected components: {}",
        spectrum.connected_components(1e-9)
    );

    let fiedler_value = spectrum
        .algebraic_connectivity()
        .ok_or("graph has a single node")?;
    let fiedler = spectrum.fiedler_vector().ok_or("graph has a single node")?;
    let sides = spectrum.bipartition().ok_or("graph has a single node")?;
    println!("Algebraic connectivity: {:.6}", fiedler_value);

    let mut file = File::create(format!("{}fiedler.csv", OUTPUT_DIR))?;
    writeln!(file, "node,fiedler,side")?;
    for (i, (v, side)) in fiedler.iter().zip(&sides).enumerate() {
        println!("  node {}: {:>9.5} -> {}", i, v, if *side { "+" } else { "-" });
        writeln!(file, "{},{},{}", i, v, *side as u8)?;
    }
    println!("Saved fiedler.csv");

    Ok(())
}

/// 3. Discrete vs Continuous Laplacian
fn run_continuum_comparison() -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Discrete vs Continuous Laplacian");
    println!("-----------------------------------");

    let mut file = File::create(format!("{}continuum.csv", OUTPUT_DIR))?;
    writeln!(file, "graph,n,mode,discrete,continuous,relative_error")?;

    for n in [10, 20, 40, 80] {
        let path = ContinuumComparison::path(n, 1.0, 5)?;
        let cycle = ContinuumComparison::cycle(n, 1.0, 5)?;
        println!(
            "  n = {:>3}: path max rel. error = {:.3e}, cycle max rel. error = {:.3e}",
            n,
            path.max_relative_error(),
            cycle.max_relative_error()
        );
        for (name, cmp) in [("path", &path), ("cycle", &cycle)] {
            for m in &cmp.modes {
                writeln!(
                    file,
                    "{},{},{},{},{},{}",
                    name, n, m.mode, m.discrete, m.continuous, m.relative_error
                )?;
            }
        }
    }
    println!("Saved continuum.csv");

    // -L f / h^2 approximates f'' away from the boundary
    let pi = std::f64::consts::PI;
    let ops = OperatorComparison::path(
        |x| (2.0 * pi * x).cos(),
        |x| -4.0 * pi * pi * (2.0 * pi * x).cos(),
        50,
        1.0,
    )?;
    println!(
        "  cos(2 pi x), n = 50: max interior error = {:.4e}",
        ops.max_interior_error()
    );

    let mut file = File::create(format!("{}second_derivative.csv", OUTPUT_DIR))?;
    writeln!(file, "x,discrete,exact")?;
    for i in 0..ops.points.len() {
        writeln!(file, "{},{},{}", ops.points[i], ops.discrete[i], ops.exact[i])?;
    }
    println!("Saved second_derivative.csv");

    Ok(())
}

/// 4. Beta Sweep
fn run_beta_sweep() -> Result<(), Box<dyn std::error::Error>> {
    println!("4. Beta Sweep");
    println!("-------------");

    // Two concentric rings in 3D, with a deterministic wobble in z
    let n_per_ring = 30;
    let n = 2 * n_per_ring;
    let x = DMatrix::from_fn(3, n, |i, j| {
        let ring = j / n_per_ring;
        let t = 2.0 * std::f64::consts::PI * (j % n_per_ring) as f64 / n_per_ring as f64;
        let radius = 1.0 + 2.0 * ring as f64;
        let wobble = 0.05 * ((j as f64 * 7.0).sin() + (j as f64 * 13.0).cos());
        match i {
            0 => radius * t.cos(),
            1 => radius * t.sin(),
            _ => 0.5 * ring as f64 + wobble,
        }
    });

    let w = KnnGraph::new(4)
        .kernel(Heat(0.5))
        .symmetrization(Union)
        .build(&x)?;

    let sweep = Glpca::new()
        .components(2)
        .return_fits()
        .adapter(Sweep)
        .build()?
        .fit(&x, &w)?;

    println!("{}", sweep);

    let mut file = File::create(format!("{}sweep.csv", OUTPUT_DIR))?;
    writeln!(file, "beta,reconstruction_error,graph_smoothness")?;
    for p in &sweep.points {
        writeln!(
            file,
            "{},{},{}",
            p.beta, p.reconstruction_error, p.graph_smoothness
        )?;
    }
    println!("Saved sweep.csv");

    let mut file = File::create(format!("{}embeddings.csv", OUTPUT_DIR))?;
    writeln!(file, "beta,sample,ring,q1,q2")?;
    for fit in sweep.fits.iter().flatten() {
        for s in 0..fit.n_samples() {
            writeln!(
                file,
                "{},{},{},{},{}",
                fit.beta,
                s,
                s / n_per_ring,
                fit.embedding[(s, 0)],
                fit.embedding[(s, 1)]
            )?;
        }
    }
    println!("Saved embeddings.csv");

    Ok(())
}
