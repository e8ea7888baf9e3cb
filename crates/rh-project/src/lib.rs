//! rh-project: problem file format and validation.

pub mod schema;
pub mod validate;

use std::path::Path;

pub use schema::*;
pub use validate::{MAX_NODES, ValidationError, validate_problem};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Mesh error: {0}")]
    Mesh(#[from] rh_mesh::MeshError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Problem> {
    let content = std::fs::read_to_string(path)?;
    let problem: Problem = serde_yaml::from_str(&content)?;
    validate_problem(&problem)?;
    Ok(problem)
}

pub fn save_yaml(path: &Path, problem: &Problem) -> ProjectResult<()> {
    validate_problem(problem)?;
    let content = serde_yaml::to_string(problem)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Problem> {
    let content = std::fs::read_to_string(path)?;
    let problem: Problem = serde_json::from_str(&content)?;
    validate_problem(&problem)?;
    Ok(problem)
}

pub fn save_json(path: &Path, problem: &Problem) -> ProjectResult<()> {
    validate_problem(problem)?;
    let content = serde_json::to_string_pretty(problem)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load(path: &Path) -> ProjectResult<Problem> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Save by extension: `.json` is JSON, anything else YAML.
pub fn save(path: &Path, problem: &Problem) -> ProjectResult<()> {
    if is_json(path) {
        save_json(path, problem)
    } else {
        save_yaml(path, problem)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
