//! Error types for solver operations.

use rh_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while assembling or solving a rod problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Degenerate mesh: {what}")]
    DegenerateMesh { what: String },

    #[error("Invalid condition: {what}")]
    InvalidCondition { what: String },

    #[error("Singular system: {what}")]
    SingularSystem { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<MeshError> for SolverError {
    fn from(e: MeshError) -> Self {
        if e.is_condition_error() {
            SolverError::InvalidCondition {
                what: e.to_string(),
            }
        } else {
            SolverError::DegenerateMesh {
                what: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rh_core::NodeId;
    use rh_mesh::ConditionRole;

    #[test]
    fn mesh_errors_map_to_kinds() {
        let e: SolverError = MeshError::TooFewNodes { count: 1 }.into();
        assert!(matches!(e, SolverError::DegenerateMesh { .. }));

        let e: SolverError = MeshError::ConditionNodeNotFound {
            role: ConditionRole::Dirichlet,
            node: NodeId::new(4).unwrap(),
        }
        .into();
        assert_eq!(
            e.to_string(),
            "Invalid condition: Dirichlet condition refers to non-existent node 4"
        );
    }
}
