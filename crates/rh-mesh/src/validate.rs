//! Mesh validation logic.

use rh_core::{Tolerances, nearly_equal};

use crate::error::{MeshError, MeshResult};
use crate::indexing::IndexMap;
use crate::mesh::{BoundaryCondition, ConditionRole, Element, Node, Parameters};

/// Spacing may drift from `l` by accumulated rounding in the coordinates.
const SPACING_TOL: Tolerances = Tolerances {
    abs: 1e-12,
    rel: 1e-6,
};

/// Nodes: at least two, index-aligned, finite coordinates.
pub(crate) fn validate_nodes(nodes: &[Node]) -> MeshResult<()> {
    if nodes.len() < 2 {
        return Err(MeshError::TooFewNodes { count: nodes.len() });
    }

    for (i, node) in nodes.iter().enumerate() {
        if node.index() != i {
            return Err(MeshError::MisalignedNode {
                node: node.id,
                position: i,
            });
        }
        if !node.coord.is_finite() {
            return Err(MeshError::NonFiniteCoord {
                node: node.id,
                value: node.coord,
            });
        }
    }

    Ok(())
}

/// Elements: one per consecutive node pair, positive length equal to `l`.
pub(crate) fn validate_elements(
    nodes: &[Node],
    elements: &[Element],
    parameters: &Parameters,
    index: &IndexMap,
) -> MeshResult<()> {
    let expected = nodes.len().saturating_sub(1);
    if elements.len() != expected {
        return Err(MeshError::ElementCount {
            expected,
            actual: elements.len(),
        });
    }

    for element in elements {
        let first = index
            .node_idx(element.first)
            .map_err(|_| MeshError::InvalidNodeRef {
                element: element.id,
                node: element.first,
            })?;
        let second = index
            .node_idx(element.second)
            .map_err(|_| MeshError::InvalidNodeRef {
                element: element.id,
                node: element.second,
            })?;

        if second != first + 1 {
            return Err(MeshError::NonAdjacentElement {
                element: element.id,
                first: element.first,
                second: element.second,
            });
        }

        let length = nodes[second].coord - nodes[first].coord;
        if length <= 0.0 {
            return Err(MeshError::DegenerateElement {
                element: element.id,
                length,
            });
        }
        if !nearly_equal(length, parameters.l, SPACING_TOL) {
            return Err(MeshError::SpacingMismatch {
                element: element.id,
                length,
                expected: parameters.l,
            });
        }
    }

    Ok(())
}

/// Conditions: must be set, reference an existing node and carry a finite value.
pub(crate) fn validate_condition(
    role: ConditionRole,
    condition: Option<BoundaryCondition>,
    index: &IndexMap,
) -> MeshResult<BoundaryCondition> {
    let condition = condition.ok_or(MeshError::MissingCondition { role })?;
    if !index.contains_node(condition.node) {
        return Err(MeshError::ConditionNodeNotFound {
            role,
            node: condition.node,
        });
    }
    if !condition.value.is_finite() {
        return Err(MeshError::NonFiniteCondition {
            role,
            value: condition.value,
        });
    }
    Ok(condition)
}
