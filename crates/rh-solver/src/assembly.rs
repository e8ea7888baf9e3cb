//! Scatter-add assembly of local contributions into the global system.

use nalgebra::{DMatrix, DVector};
use rh_core::Real;
use rh_mesh::{Element, Mesh, Node};

use crate::error::{SolverError, SolverResult};
use crate::local::LocalContribution;

/// Assembled global stiffness matrix and load vector, before boundary conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSystem {
    /// n x n stiffness
    pub k: DMatrix<Real>,
    /// length-n load
    pub b: DVector<Real>,
}

impl GlobalSystem {
    /// Number of degrees of freedom (rows of `k`).
    pub fn size(&self) -> usize {
        self.b.len()
    }

    pub fn is_symmetric(&self, tol: Real) -> bool {
        let n = self.k.nrows();
        self.k.is_square()
            && (0..n).all(|i| (0..i).all(|j| (self.k[(i, j)] - self.k[(j, i)]).abs() <= tol))
    }
}

/// Accumulator that only lives for the duration of [`assemble`].
struct SystemBuilder {
    k: DMatrix<Real>,
    b: DVector<Real>,
}

impl SystemBuilder {
    fn zeros(n: usize) -> Self {
        Self {
            k: DMatrix::zeros(n, n),
            b: DVector::zeros(n),
        }
    }

    fn scatter(&mut self, dofs: [usize; 2], local: &LocalContribution) {
        for (a, &row) in dofs.iter().enumerate() {
            for (c, &col) in dofs.iter().enumerate() {
                self.k[(row, col)] += local.stiffness[(a, c)];
            }
            self.b[row] += local.load[a];
        }
    }

    fn finish(self) -> GlobalSystem {
        GlobalSystem {
            k: self.k,
            b: self.b,
        }
    }
}

/// Build the global system from one local contribution per element.
///
/// Elements address rows through their nodes' indices; contributions at a
/// shared node accumulate. An empty element list yields an all-zero system.
pub fn assemble(
    nodes: &[Node],
    elements: &[Element],
    locals: &[LocalContribution],
) -> SolverResult<GlobalSystem> {
    if elements.len() != locals.len() {
        return Err(SolverError::DegenerateMesh {
            what: format!(
                "{} elements but {} local contributions",
                elements.len(),
                locals.len()
            ),
        });
    }

    let n = nodes.len();
    elements
        .iter()
        .zip(locals)
        .try_fold(SystemBuilder::zeros(n), |mut acc, (element, local)| {
            let dofs = element_dofs(element, n)?;
            acc.scatter(dofs, local);
            Ok::<_, SolverError>(acc)
        })
        .map(SystemBuilder::finish)
}

/// [`assemble`] over a validated mesh.
pub fn assemble_mesh(mesh: &Mesh, locals: &[LocalContribution]) -> SolverResult<GlobalSystem> {
    assemble(mesh.nodes(), mesh.elements(), locals)
}

fn element_dofs(element: &Element, n: usize) -> SolverResult<[usize; 2]> {
    let dofs = [element.first.index(), element.second.index()];
    for (&dof, id) in dofs.iter().zip(element.nodes()) {
        if dof >= n {
            return Err(SolverError::DegenerateMesh {
                what: format!(
                    "element {} refers to node {} outside a mesh of {} nodes",
                    element.id, id, n
                ),
            });
        }
    }
    Ok(dofs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix2, Vector2};
    use rh_core::{ElementId, NodeId};

    fn chain(n: u32) -> (Vec<Node>, Vec<Element>) {
        let nodes = (0..n)
            .map(|i| Node {
                id: NodeId::from_index(i),
                coord: i as f64,
            })
            .collect();
        let elements = (1..n)
            .map(|i| Element {
                id: ElementId::from_index(i - 1),
                first: NodeId::from_index(i - 1),
                second: NodeId::from_index(i),
            })
            .collect();
        (nodes, elements)
    }

    fn unit_local() -> LocalContribution {
        LocalContribution {
            stiffness: Matrix2::new(1.0, -1.0, -1.0, 1.0),
            load: Vector2::new(0.5, 0.5),
        }
    }

    #[test]
    fn three_nodes_is_tridiagonal() {
        let (nodes, elements) = chain(3);
        let locals = vec![unit_local(); 2];
        let system = assemble(&nodes, &elements, &locals).unwrap();

        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[1.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 1.0],
        );
        assert_eq!(system.k, expected);
        assert_eq!(system.b, DVector::from_vec(vec![0.5, 1.0, 0.5]));
        assert!(system.is_symmetric(0.0));
    }

    #[test]
    fn empty_elements_give_zero_system() {
        let (nodes, _) = chain(3);
        let system = assemble(&nodes, &[], &[]).unwrap();
        assert_eq!(system.size(), 3);
        assert!(system.k.iter().all(|&v| v == 0.0));
        assert!(system.b.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn mismatched_locals() {
        let (nodes, elements) = chain(3);
        assert!(matches!(
            assemble(&nodes, &elements, &[unit_local()]),
            Err(SolverError::DegenerateMesh { .. })
        ));
    }

    #[test]
    fn element_outside_node_list() {
        let (nodes, elements) = chain(3);
        assert!(matches!(
            assemble(&nodes[..2], &elements, &[unit_local(), unit_local()]),
            Err(SolverError::DegenerateMesh { .. })
        ));
    }
}
