//! Mesh-specific error types.

use rh_core::{CoreError, ElementId, NodeId, Real};

use crate::mesh::ConditionRole;

pub type MeshResult<T> = Result<T, MeshError>;

/// Mesh construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Fewer nodes than a single element needs.
    TooFewNodes { count: usize },

    /// Element count does not match `nodes - 1`.
    ElementCount { expected: usize, actual: usize },

    /// An element has zero or negative length.
    DegenerateElement { element: ElementId, length: Real },

    /// An element's length disagrees with the mesh spacing parameter.
    SpacingMismatch {
        element: ElementId,
        length: Real,
        expected: Real,
    },

    /// A node sits at a position that disagrees with its id.
    MisalignedNode { node: NodeId, position: usize },

    /// A node coordinate is NaN or infinite.
    NonFiniteCoord { node: NodeId, value: Real },

    /// An element refers to a node that doesn't exist.
    InvalidNodeRef { element: ElementId, node: NodeId },

    /// An element's nodes are not consecutive in the chain.
    NonAdjacentElement {
        element: ElementId,
        first: NodeId,
        second: NodeId,
    },

    /// A boundary condition refers to a node that doesn't exist.
    ConditionNodeNotFound { role: ConditionRole, node: NodeId },

    /// A boundary condition value is NaN or infinite.
    NonFiniteCondition { role: ConditionRole, value: Real },

    /// A boundary condition was never set.
    MissingCondition { role: ConditionRole },

    /// ID not found in index map.
    IdNotFound { what: &'static str },

    /// Parameter or value rejected by a numeric guard.
    Invalid(CoreError),
}

impl MeshError {
    /// True for errors that describe a bad boundary condition rather than bad geometry.
    pub fn is_condition_error(&self) -> bool {
        matches!(
            self,
            MeshError::ConditionNodeNotFound { .. }
                | MeshError::NonFiniteCondition { .. }
                | MeshError::MissingCondition { .. }
        )
    }
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::TooFewNodes { count } => {
                write!(f, "Mesh has {} node(s), at least 2 are required", count)
            }
            MeshError::ElementCount { expected, actual } => {
                write!(f, "Mesh has {} elements (expected {})", actual, expected)
            }
            MeshError::DegenerateElement { element, length } => {
                write!(f, "Element {} has non-positive length {}", element, length)
            }
            MeshError::SpacingMismatch {
                element,
                length,
                expected,
            } => {
                write!(
                    f,
                    "Element {} has length {} but the mesh spacing is {}",
                    element, length, expected
                )
            }
            MeshError::MisalignedNode { node, position } => {
                write!(
                    f,
                    "Node {} is stored at position {}, expected position {}",
                    node,
                    position,
                    node.index()
                )
            }
            MeshError::NonFiniteCoord { node, value } => {
                write!(f, "Node {} has non-finite coordinate {}", node, value)
            }
            MeshError::InvalidNodeRef { element, node } => {
                write!(f, "Element {} refers to non-existent node {}", element, node)
            }
            MeshError::NonAdjacentElement {
                element,
                first,
                second,
            } => {
                write!(
                    f,
                    "Element {} joins nodes {} and {} which are not adjacent",
                    element, first, second
                )
            }
            MeshError::ConditionNodeNotFound { role, node } => {
                write!(f, "{} condition refers to non-existent node {}", role, node)
            }
            MeshError::NonFiniteCondition { role, value } => {
                write!(f, "{} condition has non-finite value {}", role, value)
            }
            MeshError::MissingCondition { role } => {
                write!(f, "{} condition is not set", role)
            }
            MeshError::IdNotFound { what } => {
                write!(f, "{} not found in index map", what)
            }
            MeshError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoreError> for MeshError {
    fn from(err: CoreError) -> Self {
        MeshError::Invalid(err)
    }
}
