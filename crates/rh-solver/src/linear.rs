//! Direct solve of the reduced system.

use nalgebra::{DMatrix, DVector};
use rh_core::Real;

use crate::error::{SolverError, SolverResult};

/// Pivots smaller than this fraction of the largest matrix entry count as zero.
const SINGULAR_RTOL: Real = 1e-12;

/// How to solve `K' T' = b'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolveMethod {
    /// LU decomposition with partial pivoting.
    #[default]
    Lu,
    /// Explicit inverse, then `K'^-1 b'`.
    Inverse,
}

/// Solve a square system, rejecting singular or near-singular matrices.
pub fn solve_linear(
    k: &DMatrix<Real>,
    b: &DVector<Real>,
    method: SolveMethod,
) -> SolverResult<DVector<Real>> {
    if !k.is_square() || k.nrows() != b.len() {
        return Err(SolverError::SingularSystem {
            what: format!(
                "matrix is {}x{} but right-hand side has {} rows",
                k.nrows(),
                k.ncols(),
                b.len()
            ),
        });
    }
    if k.is_empty() {
        return Err(SolverError::InvalidCondition {
            what: "no free degrees of freedom to solve for".to_string(),
        });
    }

    let lu = k.clone().lu();
    check_pivots(k, &lu.u())?;

    let x = match method {
        SolveMethod::Lu => lu.solve(b).ok_or_else(|| SolverError::SingularSystem {
            what: "LU solve failed".to_string(),
        })?,
        SolveMethod::Inverse => {
            let inv = k
                .clone()
                .try_inverse()
                .ok_or_else(|| SolverError::SingularSystem {
                    what: "matrix is not invertible".to_string(),
                })?;
            inv * b
        }
    };

    if x.iter().any(|v| !v.is_finite()) {
        return Err(SolverError::SingularSystem {
            what: "solution contains non-finite values".to_string(),
        });
    }

    Ok(x)
}

fn check_pivots(k: &DMatrix<Real>, u: &DMatrix<Real>) -> SolverResult<()> {
    let scale = k.amax();
    if !scale.is_finite() || scale == 0.0 {
        return Err(SolverError::SingularSystem {
            what: format!("stiffness matrix has scale {}", scale),
        });
    }

    let min_pivot = u
        .diagonal()
        .iter()
        .fold(Real::INFINITY, |acc, p| acc.min(p.abs()));
    if min_pivot <= SINGULAR_RTOL * scale {
        return Err(SolverError::SingularSystem {
            what: format!(
                "smallest pivot {:.3e} is negligible against matrix scale {:.3e}",
                min_pivot, scale
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_by_one() {
        let k = DMatrix::from_element(1, 1, 1.0);
        let b = DVector::from_element(1, 5.0);
        let x = solve_linear(&k, &b, SolveMethod::Lu).unwrap();
        assert_eq!(x[0], 5.0);
    }

    #[test]
    fn methods_agree() {
        let k = DMatrix::from_row_slice(3, 3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 1.0]);
        let b = DVector::from_vec(vec![0.5, 1.0, 3.0]);
        let lu = solve_linear(&k, &b, SolveMethod::Lu).unwrap();
        let inv = solve_linear(&k, &b, SolveMethod::Inverse).unwrap();
        assert!((lu - inv).amax() < 1e-12);
    }

    #[test]
    fn zero_matrix_is_singular() {
        let k = DMatrix::zeros(2, 2);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        for method in [SolveMethod::Lu, SolveMethod::Inverse] {
            assert!(matches!(
                solve_linear(&k, &b, method),
                Err(SolverError::SingularSystem { .. })
            ));
        }
    }

    #[test]
    fn rank_deficient_is_singular() {
        // free-floating rod: no Dirichlet row removed
        let k = DMatrix::from_row_slice(2, 2, &[1.0, -1.0, -1.0, 1.0]);
        let b = DVector::zeros(2);
        assert!(matches!(
            solve_linear(&k, &b, SolveMethod::Lu),
            Err(SolverError::SingularSystem { .. })
        ));
    }

    #[test]
    fn overflowing_solution_is_rejected() {
        // well-conditioned but the quotient overflows f64
        let k = DMatrix::from_element(1, 1, 1e-300);
        let b = DVector::from_element(1, 1e300);
        for method in [SolveMethod::Lu, SolveMethod::Inverse] {
            assert_eq!(
                solve_linear(&k, &b, method),
                Err(SolverError::SingularSystem {
                    what: "solution contains non-finite values".to_string()
                })
            );
        }
    }

    #[test]
    fn empty_system() {
        let k = DMatrix::zeros(0, 0);
        let b = DVector::zeros(0);
        assert!(matches!(
            solve_linear(&k, &b, SolveMethod::Lu),
            Err(SolverError::InvalidCondition { .. })
        ));
    }

    #[test]
    fn shape_mismatch() {
        let k = DMatrix::zeros(2, 2);
        let b = DVector::zeros(3);
        assert!(solve_linear(&k, &b, SolveMethod::Lu).is_err());
    }
}
