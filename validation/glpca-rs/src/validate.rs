use glpca_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    #[serde(skip_deserializing)]
    result: ResultData,
}

/// Matrices are stored row by row; `x` is features x samples.
#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<Vec<f64>>,
    w: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    beta: f64,
    components: usize,
    #[serde(default = "default_center")]
    center: bool,
    #[serde(default)]
    laplacian: Option<String>,
}

fn default_center() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    embedding: Vec<Vec<f64>>,
    eigenvalues: Vec<f64>,
    lambda_max: f64,
    xi_max: f64,
    alpha: Option<f64>,
    reconstruction_error: f64,
    objective: Option<f64>,
    laplacian_identities_hold: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/glpca_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Generate the reference cases first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn to_matrix(rows: &[Vec<f64>], what: &str) -> Result<DMatrix<f64>, Box<dyn Error>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != n_cols) {
        return Err(format!("{} has ragged rows", what).into());
    }
    Ok(DMatrix::from_fn(n_rows, n_cols, |i, j| rows[i][j]))
}

fn to_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..m.nrows())
        .map(|i| m.row(i).iter().copied().collect())
        .collect()
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let x = to_matrix(&data.input.x, "x")?;
    let w = to_matrix(&data.input.w, "w")?;

    let laplacian = match data.params.laplacian.as_deref() {
        None | Some("combinatorial") => Combinatorial,
        Some("normalized") => SymmetricNormalized,
        Some(other) => return Err(format!("Unsupported laplacian: {}", other).into()),
    };

    let processor = Glpca::new()
        .beta(data.params.beta)
        .components(data.params.components)
        .center(data.params.center)
        .laplacian(laplacian)
        .adapter(Batch)
        .build()?;

    let result = processor.fit(&x, &w)?;
    log::info!("{}: error={:.6}", data.name, result.reconstruction_error);

    // Binary similarity matrices also describe a graph; check its identities.
    let identities = Graph::from_adjacency(&w)
        .ok()
        .map(|g| GraphMatrices::<f64>::from_graph(&g))
        .map(|m| m.verify().map(|r| r.holds(1e-9)))
        .transpose()?
        .unwrap_or(false);

    data.result = ResultData {
        embedding: to_rows(&result.embedding),
        eigenvalues: result.eigenvalues.clone(),
        lambda_max: result.lambda_max,
        xi_max: result.xi_max,
        alpha: result.alpha,
        reconstruction_error: result.reconstruction_error,
        objective: result.objective,
        laplacian_identities_hold: identities,
    };

    let file_name = input_path
        .file_name()
        .ok_or_else(|| format!("{:?} has no file name", input_path))?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(())
}
