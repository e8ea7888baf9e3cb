//! Core mesh data structures.

use core::fmt;
use rh_core::{Conductivity, CoreResult, ElementId, Length, NodeId, Real};
use rh_core::{ensure_finite, ensure_positive};

use crate::error::{MeshError, MeshResult};
use crate::indexing::IndexMap;

/// A mesh node: a point along the rod.
///
/// The 0-based matrix index is derived from the id, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Distance from the start of the rod.
    pub coord: Real,
}

impl Node {
    pub fn index(&self) -> usize {
        self.id.index()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.coord)
    }
}

/// A linear element spanning two adjacent nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub first: NodeId,
    pub second: NodeId,
}

impl Element {
    /// Both node ids in local order.
    pub fn nodes(&self) -> [NodeId; 2] {
        [self.first, self.second]
    }
}

/// Which role a boundary condition plays in the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionRole {
    /// Fixed temperature.
    Dirichlet,
    /// Fixed flux.
    Neumann,
}

impl fmt::Display for ConditionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionRole::Dirichlet => write!(f, "Dirichlet"),
            ConditionRole::Neumann => write!(f, "Neumann"),
        }
    }
}

/// A value pinned to one node. Its meaning comes from the role it is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCondition {
    pub node: NodeId,
    pub value: Real,
}

impl BoundaryCondition {
    pub fn new(node: NodeId, value: Real) -> Self {
        Self { node, value }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node: {}, value: {}", self.node, self.value)
    }
}

/// Material and discretisation parameters, uniform over the rod.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Element length.
    pub l: Real,
    /// Conductivity.
    pub k: Real,
    /// Volumetric heat source.
    pub q: Real,
}

impl Parameters {
    /// Validated constructor: `l` must be positive, `k` and `q` finite.
    pub fn new(l: Real, k: Real, q: Real) -> CoreResult<Self> {
        Ok(Self {
            l: ensure_positive(l, "element length")?,
            k: ensure_finite(k, "conductivity")?,
            q: ensure_finite(q, "heat source")?,
        })
    }

    /// Build from SI quantities; `q` is taken in W/m³.
    pub fn from_quantities(l: Length, k: Conductivity, q: Real) -> CoreResult<Self> {
        Self::new(l.value, k.value, q)
    }
}

/// A validated, immutable rod mesh.
///
/// Holds the ordered node chain, the elements between consecutive nodes,
/// one Dirichlet and one Neumann condition, and an id -> index map built
/// once at construction.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub(crate) parameters: Parameters,
    pub(crate) nodes: Vec<Node>,
    pub(crate) elements: Vec<Element>,
    pub(crate) dirichlet: BoundaryCondition,
    pub(crate) neumann: BoundaryCondition,
    pub(crate) index: IndexMap,
}

impl Mesh {
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn dirichlet(&self) -> &BoundaryCondition {
        &self.dirichlet
    }

    pub fn neumann(&self) -> &BoundaryCondition {
        &self.neumann
    }

    pub fn index_map(&self) -> &IndexMap {
        &self.index
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Get a node by ID (returns None if the id is not in the mesh).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let idx = self.index.node_idx(id).ok()?;
        self.nodes.get(idx)
    }

    /// Matrix index of a node.
    pub fn node_index(&self, id: NodeId) -> MeshResult<usize> {
        self.index.node_idx(id)
    }

    /// Resolve an element's two nodes.
    pub fn element_nodes(&self, element: &Element) -> MeshResult<(&Node, &Node)> {
        let first = self
            .node(element.first)
            .ok_or(MeshError::InvalidNodeRef {
                element: element.id,
                node: element.first,
            })?;
        let second = self
            .node(element.second)
            .ok_or(MeshError::InvalidNodeRef {
                element: element.id,
                node: element.second,
            })?;
        Ok((first, second))
    }

    /// Geometric length `second.coord - first.coord`.
    pub fn element_length(&self, element: &Element) -> MeshResult<Real> {
        let (first, second) = self.element_nodes(element)?;
        Ok(second.coord - first.coord)
    }

    /// Total rod length from the first to the last node.
    pub fn length(&self) -> Real {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(a), Some(b)) => b.coord - a.coord,
            _ => 0.0,
        }
    }

    /// True when the Dirichlet and Neumann conditions sit on the same node.
    pub fn conditions_coincide(&self) -> bool {
        self.dirichlet.node == self.neumann.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rh_core::{CoreError, m, w_per_m_k};

    #[test]
    fn node_index_follows_id() {
        let node = Node {
            id: NodeId::new(4).unwrap(),
            coord: 1.5,
        };
        assert_eq!(node.index(), 3);
        assert_eq!(node.to_string(), "(4, 1.5)");
    }

    #[test]
    fn element_nodes_in_order() {
        let e = Element {
            id: ElementId::new(1).unwrap(),
            first: NodeId::new(1).unwrap(),
            second: NodeId::new(2).unwrap(),
        };
        assert_eq!(e.nodes(), [e.first, e.second]);
    }

    #[test]
    fn condition_display() {
        let bc = BoundaryCondition::new(NodeId::new(1).unwrap(), 15.0);
        assert_eq!(bc.to_string(), "node: 1, value: 15");
    }

    #[test]
    fn parameters_reject_bad_length() {
        assert!(matches!(
            Parameters::new(0.0, 1.0, 0.0),
            Err(CoreError::NonPositive { .. })
        ));
        assert!(Parameters::new(-0.5, 1.0, 0.0).is_err());
        assert!(Parameters::new(1.0, f64::NAN, 0.0).is_err());
        assert!(Parameters::new(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn parameters_from_quantities() {
        let p = Parameters::from_quantities(m(0.25), w_per_m_k(2.0), 3.0).unwrap();
        assert_eq!(p, Parameters::new(0.25, 2.0, 3.0).unwrap());
    }
}
