//! Problem file validation logic.

use crate::schema::{ConditionDef, LATEST_VERSION, Problem};

/// Largest node count a problem file may request.
///
/// The global stiffness matrix is dense, so memory grows with `nodes²`:
/// 10 000 nodes need about 800 MB of `f64`.
pub const MAX_NODES: usize = 10_000;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Missing reference: node {id} in {context}")]
    MissingReference { id: u32, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_problem(problem: &Problem) -> Result<(), ValidationError> {
    if problem.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: problem.version,
        });
    }

    let p = &problem.parameters;
    if !(p.l.is_finite() && p.l > 0.0) {
        return Err(invalid("parameters.l", p.l, "must be a positive number"));
    }
    if !p.k.is_finite() {
        return Err(invalid("parameters.k", p.k, "must be finite"));
    }
    if !p.q.is_finite() {
        return Err(invalid("parameters.q", p.q, "must be finite"));
    }

    if problem.nodes < 2 {
        return Err(invalid(
            "nodes",
            problem.nodes,
            "at least 2 nodes are needed for one element",
        ));
    }
    if problem.nodes > MAX_NODES {
        return Err(invalid(
            "nodes",
            problem.nodes,
            &format!("at most {} nodes are supported", MAX_NODES),
        ));
    }

    validate_condition(&problem.dirichlet, problem.nodes, "dirichlet")?;
    validate_condition(&problem.neumann, problem.nodes, "neumann")?;

    Ok(())
}

fn validate_condition(
    condition: &ConditionDef,
    nodes: usize,
    context: &str,
) -> Result<(), ValidationError> {
    if condition.node == 0 || condition.node as usize > nodes {
        return Err(ValidationError::MissingReference {
            id: condition.node,
            context: format!("{} (nodes are 1..={})", context, nodes),
        });
    }
    if !condition.value.is_finite() {
        return Err(invalid(
            &format!("{}.value", context),
            condition.value,
            "must be finite",
        ));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_is_valid() {
        validate_problem(&Problem::example()).unwrap();
    }

    #[test]
    fn future_version_is_rejected() {
        let mut problem = Problem::example();
        problem.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_problem(&problem),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut problem = Problem::example();
        problem.parameters.l = 0.0;
        let err = validate_problem(&problem).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value: parameters.l = 0 (must be a positive number)"
        );
    }

    #[test]
    fn condition_node_out_of_range() {
        let mut problem = Problem::example();
        problem.dirichlet.node = 6;
        assert!(matches!(
            validate_problem(&problem),
            Err(ValidationError::MissingReference { id: 6, .. })
        ));

        problem.dirichlet.node = 0;
        assert!(validate_problem(&problem).is_err());
    }

    #[test]
    fn single_node_is_rejected() {
        let mut problem = Problem::example();
        problem.nodes = 1;
        problem.dirichlet.node = 1;
        problem.neumann.node = 1;
        assert!(matches!(
            validate_problem(&problem),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn node_count_is_capped() {
        let mut problem = Problem::example();
        problem.nodes = MAX_NODES;
        validate_problem(&problem).unwrap();

        problem.nodes = 200_000;
        let err = validate_problem(&problem).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value: nodes = 200000 (at most 10000 nodes are supported)"
        );
    }
}
