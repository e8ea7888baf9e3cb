//! Nodal temperatures produced by a solve.

use nalgebra::DVector;
use rh_core::{NodeId, Real, Temperature, kelvin};

use crate::conditions::DofMap;

/// Solution of a rod problem.
#[derive(Clone, Debug)]
pub struct RodSolution {
    /// Free-node temperatures in reduced row order
    reduced: DVector<Real>,
    /// All node temperatures in node order, Dirichlet value included
    temperatures: Vec<Real>,
    dof_map: DofMap,
    /// `||K'T' - b'||` of the reduced system
    pub residual_norm: Real,
}

impl RodSolution {
    pub(crate) fn new(
        reduced: DVector<Real>,
        dof_map: DofMap,
        dirichlet_value: Real,
        residual_norm: Real,
    ) -> Self {
        let temperatures = expand(&reduced, &dof_map, dirichlet_value);
        Self {
            reduced,
            temperatures,
            dof_map,
            residual_norm,
        }
    }

    /// The n-1 free temperatures, shifted past the eliminated node.
    pub fn reduced(&self) -> &[Real] {
        self.reduced.as_slice()
    }

    /// One temperature per node, in node order.
    pub fn temperatures(&self) -> &[Real] {
        &self.temperatures
    }

    pub fn dof_map(&self) -> &DofMap {
        &self.dof_map
    }

    /// Temperature of a node by id.
    pub fn temperature(&self, node: NodeId) -> Option<Real> {
        self.temperatures.get(node.index()).copied()
    }

    /// Temperature of a node as an SI quantity, reading values as kelvin.
    pub fn temperature_at(&self, node: NodeId) -> Option<Temperature> {
        self.temperature(node).map(kelvin)
    }

    /// `(id, temperature)` for every node in order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Real)> + '_ {
        self.temperatures
            .iter()
            .enumerate()
            .map(|(i, &t)| (NodeId::from_index(i as u32), t))
    }

    /// Id of the node fixed by the Dirichlet condition.
    pub fn fixed_node(&self) -> NodeId {
        NodeId::from_index(self.dof_map.eliminated() as u32)
    }
}

/// Re-insert the known Dirichlet value at its original position.
fn expand(reduced: &DVector<Real>, dof_map: &DofMap, dirichlet_value: Real) -> Vec<Real> {
    let mut out = vec![dirichlet_value; reduced.len() + 1];
    for (row, &t) in reduced.iter().enumerate() {
        out[dof_map.original_index(row)] = t;
    }
    out
}
