//! Neumann and Dirichlet application with elimination of the fixed node.

use nalgebra::{DMatrix, DVector};
use rh_core::Real;
use rh_mesh::BoundaryCondition;
use tracing::warn;

use crate::assembly::GlobalSystem;
use crate::error::{SolverError, SolverResult};

/// What to do when both conditions sit on the same node.
///
/// The flux is added to a row that elimination then discards, so it has no
/// effect on the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoincidentPolicy {
    /// Apply both anyway and log a warning.
    #[default]
    Preserve,
    /// Fail with `InvalidCondition`.
    Reject,
}

/// Mapping from reduced rows back to original node indices.
///
/// Every original index above the eliminated one moves up by one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DofMap {
    node_count: usize,
    eliminated: usize,
}

impl DofMap {
    pub fn new(node_count: usize, eliminated: usize) -> Self {
        Self {
            node_count,
            eliminated,
        }
    }

    /// Number of free degrees of freedom.
    pub fn len(&self) -> usize {
        self.node_count.saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Original node index of the eliminated (Dirichlet) node.
    pub fn eliminated(&self) -> usize {
        self.eliminated
    }

    /// Original node index for a reduced row.
    pub fn original_index(&self, row: usize) -> usize {
        if row < self.eliminated { row } else { row + 1 }
    }

    /// Reduced row for an original node index; `None` for the eliminated node.
    pub fn reduced_row(&self, index: usize) -> Option<usize> {
        use std::cmp::Ordering;
        match index.cmp(&self.eliminated) {
            Ordering::Less => Some(index),
            Ordering::Equal => None,
            Ordering::Greater if index < self.node_count => Some(index - 1),
            Ordering::Greater => None,
        }
    }
}

/// System left after Dirichlet elimination: (n-1) x (n-1) and n-1.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedSystem {
    pub k: DMatrix<Real>,
    pub b: DVector<Real>,
    pub dof_map: DofMap,
    /// The known temperature of the eliminated node.
    pub dirichlet_value: Real,
}

impl ReducedSystem {
    pub fn size(&self) -> usize {
        self.b.len()
    }
}

/// Apply the Neumann flux, then eliminate the Dirichlet node.
///
/// 1. `b[neumann] += flux`
/// 2. `b[i] -= T_d * K[i][d]` for every `i != d`
/// 3. drop row and column `d` from `K` and entry `d` from `b`
pub fn apply_conditions(
    neumann: &BoundaryCondition,
    dirichlet: &BoundaryCondition,
    system: GlobalSystem,
    policy: CoincidentPolicy,
) -> SolverResult<ReducedSystem> {
    let n = system.size();
    let d = dirichlet.node.index();
    let f = neumann.node.index();

    if d >= n {
        return Err(SolverError::InvalidCondition {
            what: format!(
                "Dirichlet node {} is outside a system of {} nodes",
                dirichlet.node, n
            ),
        });
    }
    if f >= n {
        return Err(SolverError::InvalidCondition {
            what: format!(
                "Neumann node {} is outside a system of {} nodes",
                neumann.node, n
            ),
        });
    }
    if n < 2 {
        return Err(SolverError::InvalidCondition {
            what: "eliminating the Dirichlet node leaves no free degrees of freedom".to_string(),
        });
    }
    if d == f {
        match policy {
            CoincidentPolicy::Reject => {
                return Err(SolverError::InvalidCondition {
                    what: format!(
                        "Dirichlet and Neumann conditions both reference node {}",
                        dirichlet.node
                    ),
                });
            }
            CoincidentPolicy::Preserve => {
                warn!(
                    node = dirichlet.node.get(),
                    flux = neumann.value,
                    "Neumann flux applied to the Dirichlet node is discarded by elimination"
                );
            }
        }
    }

    let GlobalSystem { k, mut b } = system;

    b[f] += neumann.value;

    for i in (0..n).filter(|&i| i != d) {
        b[i] -= dirichlet.value * k[(i, d)];
    }

    let k = k.remove_row(d).remove_column(d);
    let b = b.remove_row(d);

    Ok(ReducedSystem {
        k,
        b,
        dof_map: DofMap::new(n, d),
        dirichlet_value: dirichlet.value,
    })
}
