//! Stable indexing for solver integration.
//!
//! Provides bidirectional mappings between domain IDs (NodeId, ElementId)
//! and contiguous matrix indices (0..N). Built once per mesh so condition
//! lookups never scan the node list.

use rh_core::{ElementId, NodeId};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Element, Node};

/// Index map providing O(1) bidirectional lookup between IDs and indices.
#[derive(Debug, Clone, Default)]
pub struct IndexMap {
    /// Contiguous list of node IDs (index -> NodeId).
    node_ids: Vec<NodeId>,

    /// Contiguous list of element IDs (index -> ElementId).
    element_ids: Vec<ElementId>,

    /// Reverse lookup: NodeId -> index.
    /// Sized to max(NodeId.index) + 1; None if that ID doesn't exist.
    node_to_idx: Vec<Option<usize>>,

    /// Reverse lookup: ElementId -> index.
    element_to_idx: Vec<Option<usize>>,
}

impl IndexMap {
    /// Build an index map from node and element lists.
    pub fn new(nodes: &[Node], elements: &[Element]) -> Self {
        let node_ids: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
        let element_ids: Vec<ElementId> = elements.iter().map(|e| e.id).collect();

        let node_to_idx = reverse(&node_ids);
        let element_to_idx = reverse(&element_ids);

        Self {
            node_ids,
            element_ids,
            node_to_idx,
            element_to_idx,
        }
    }

    /// Number of nodes in the index.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Number of elements in the index.
    pub fn element_count(&self) -> usize {
        self.element_ids.len()
    }

    /// Get the contiguous index for a node ID.
    pub fn node_idx(&self, id: NodeId) -> MeshResult<usize> {
        self.node_to_idx
            .get(id.index())
            .and_then(|&opt| opt)
            .ok_or(MeshError::IdNotFound { what: "NodeId" })
    }

    /// Get the contiguous index for an element ID.
    pub fn element_idx(&self, id: ElementId) -> MeshResult<usize> {
        self.element_to_idx
            .get(id.index())
            .and_then(|&opt| opt)
            .ok_or(MeshError::IdNotFound { what: "ElementId" })
    }

    /// Whether a node ID is present.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_idx(id).is_ok()
    }

    /// Get the node ID at a contiguous index.
    ///
    /// # Panics
    /// Panics if `idx >= node_count()`.
    pub fn node_id(&self, idx: usize) -> NodeId {
        self.node_ids[idx]
    }

    /// Get the element ID at a contiguous index.
    ///
    /// # Panics
    /// Panics if `idx >= element_count()`.
    pub fn element_id(&self, idx: usize) -> ElementId {
        self.element_ids[idx]
    }

    /// Iterate over all node IDs in index order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids.iter().copied()
    }
}

fn reverse(ids: &[rh_core::Id]) -> Vec<Option<usize>> {
    let max_idx = ids.iter().map(|id| id.index()).max().unwrap_or(0);
    let mut to_idx = vec![None; if ids.is_empty() { 0 } else { max_idx + 1 }];
    for (i, id) in ids.iter().enumerate() {
        to_idx[id.index()] = Some(i);
    }
    to_idx
}
