//! Incremental mesh builder.

use rh_core::{ElementId, NodeId, Real};

use crate::error::MeshResult;
use crate::indexing::IndexMap;
use crate::mesh::{BoundaryCondition, ConditionRole, Element, Mesh, Node, Parameters};
use crate::validate;

/// Builder for constructing a mesh incrementally.
///
/// Use `add_node` and `add_element` to build up the chain, set both
/// conditions, then call `build()` to validate and freeze it into an
/// immutable `Mesh`.
#[derive(Debug)]
pub struct MeshBuilder {
    parameters: Parameters,
    nodes: Vec<Node>,
    elements: Vec<Element>,
    dirichlet: Option<BoundaryCondition>,
    neumann: Option<BoundaryCondition>,
}

impl MeshBuilder {
    /// Create a new empty builder.
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            nodes: Vec::new(),
            elements: Vec::new(),
            dirichlet: None,
            neumann: None,
        }
    }

    /// Builder pre-filled with `node_count` nodes spaced `l` apart from 0,
    /// and one element between every consecutive pair.
    pub fn uniform(parameters: Parameters, node_count: usize) -> Self {
        let mut builder = Self::new(parameters);
        let mut prev: Option<NodeId> = None;
        for i in 0..node_count {
            let id = builder.add_node(i as Real * parameters.l);
            if let Some(p) = prev {
                builder.add_element(p, id);
            }
            prev = Some(id);
        }
        builder
    }

    /// Add a node at `coord` and return its ID. Ids are assigned 1, 2, 3...
    pub fn add_node(&mut self, coord: Real) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Node { id, coord });
        id
    }

    /// Add an element joining two nodes and return its ID.
    pub fn add_element(&mut self, first: NodeId, second: NodeId) -> ElementId {
        let id = ElementId::from_index(self.elements.len() as u32);
        self.elements.push(Element { id, first, second });
        id
    }

    /// Set the fixed-temperature condition.
    pub fn dirichlet(&mut self, node: NodeId, value: Real) -> &mut Self {
        self.dirichlet = Some(BoundaryCondition::new(node, value));
        self
    }

    /// Set the fixed-flux condition.
    pub fn neumann(&mut self, node: NodeId, value: Real) -> &mut Self {
        self.neumann = Some(BoundaryCondition::new(node, value));
        self
    }

    /// Node IDs added so far, in chain order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    /// Build and validate the mesh, returning an immutable `Mesh`.
    pub fn build(self) -> MeshResult<Mesh> {
        validate::validate_nodes(&self.nodes)?;

        let index = IndexMap::new(&self.nodes, &self.elements);
        validate::validate_elements(&self.nodes, &self.elements, &self.parameters, &index)?;

        let dirichlet =
            validate::validate_condition(ConditionRole::Dirichlet, self.dirichlet, &index)?;
        let neumann = validate::validate_condition(ConditionRole::Neumann, self.neumann, &index)?;

        Ok(Mesh {
            parameters: self.parameters,
            nodes: self.nodes,
            elements: self.elements,
            dirichlet,
            neumann,
            index,
        })
    }
}

impl Mesh {
    /// Equally spaced rod with `node_count` nodes and the two conditions.
    pub fn uniform(
        parameters: Parameters,
        node_count: usize,
        dirichlet: BoundaryCondition,
        neumann: BoundaryCondition,
    ) -> MeshResult<Mesh> {
        let mut builder = MeshBuilder::uniform(parameters, node_count);
        builder
            .dirichlet(dirichlet.node, dirichlet.value)
            .neumann(neumann.node, neumann.value);
        builder.build()
    }
}
