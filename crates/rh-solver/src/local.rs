//! Per-element stiffness matrix and load vector.

use nalgebra::{Matrix2, Vector2};
use rayon::prelude::*;
use rh_core::Real;
use rh_mesh::{Mesh, Parameters};

use crate::error::{SolverError, SolverResult};

/// Below this many elements the locals are built on the calling thread.
const PARALLEL_THRESHOLD: usize = 4096;

/// Local 2x2 stiffness `[[k/l, -k/l], [-k/l, k/l]]`.
pub fn local_stiffness(l: Real, k: Real) -> SolverResult<Matrix2<Real>> {
    check_length(l)?;
    let c = k / l;
    Ok(Matrix2::new(c, -c, -c, c))
}

/// Local load `[Q*l/2, Q*l/2]`: the uniform source split between both nodes.
pub fn local_load(l: Real, q: Real) -> SolverResult<Vector2<Real>> {
    check_length(l)?;
    let half = q * l / 2.0;
    Ok(Vector2::new(half, half))
}

fn check_length(l: Real) -> SolverResult<()> {
    if l.is_finite() && l > 0.0 {
        Ok(())
    } else {
        Err(SolverError::DegenerateMesh {
            what: format!("element length must be positive, got {}", l),
        })
    }
}

/// Stiffness and load of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalContribution {
    pub stiffness: Matrix2<Real>,
    pub load: Vector2<Real>,
}

impl LocalContribution {
    pub fn new(parameters: &Parameters) -> SolverResult<Self> {
        Ok(Self {
            stiffness: local_stiffness(parameters.l, parameters.k)?,
            load: local_load(parameters.l, parameters.q)?,
        })
    }
}

/// One contribution per element, in element order.
///
/// The rod is uniform, so every element gets the same `l`, `k` and `Q`.
pub fn build_locals(mesh: &Mesh) -> SolverResult<Vec<LocalContribution>> {
    let parameters = mesh.parameters();
    let elements = mesh.elements();

    if elements.len() >= PARALLEL_THRESHOLD {
        elements
            .par_iter()
            .map(|_| LocalContribution::new(parameters))
            .collect()
    } else {
        elements
            .iter()
            .map(|_| LocalContribution::new(parameters))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stiffness_entries() {
        let k = local_stiffness(0.5, 2.0).unwrap();
        assert_eq!(k, Matrix2::new(4.0, -4.0, -4.0, 4.0));
        assert_eq!(k, k.transpose());
    }

    #[test]
    fn load_is_split_evenly() {
        let b = local_load(0.5, 3.0).unwrap();
        assert_eq!(b, Vector2::new(0.75, 0.75));
    }

    #[test]
    fn zero_length_is_degenerate() {
        assert!(matches!(
            local_stiffness(0.0, 1.0),
            Err(SolverError::DegenerateMesh { .. })
        ));
        assert!(matches!(
            local_load(-1.0, 1.0),
            Err(SolverError::DegenerateMesh { .. })
        ));
        assert!(local_stiffness(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn builders_are_bit_identical() {
        let a = local_stiffness(0.3, 1.7).unwrap();
        let b = local_stiffness(0.3, 1.7).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
        let p = local_load(0.3, 9.1).unwrap();
        let q = local_load(0.3, 9.1).unwrap();
        for (x, y) in p.iter().zip(q.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}
