//! High-level solver interface.

use std::time::Instant;

use rh_mesh::Mesh;
use tracing::{debug, debug_span};

use crate::assembly::assemble_mesh;
use crate::conditions::{CoincidentPolicy, apply_conditions};
use crate::error::{SolverError, SolverResult};
use crate::linear::{SolveMethod, solve_linear};
use crate::local::build_locals;
use crate::solution::RodSolution;

/// Solver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    pub method: SolveMethod,
    pub coincident: CoincidentPolicy,
}

/// Solve a rod problem with default options.
///
/// This function:
/// 1. Builds one local stiffness/load pair per element
/// 2. Assembles them into the global system
/// 3. Adds the Neumann flux and eliminates the Dirichlet node
/// 4. Solves the reduced system
pub fn solve(mesh: &Mesh) -> SolverResult<RodSolution> {
    solve_with_options(mesh, &SolveOptions::default())
}

pub fn solve_with_options(mesh: &Mesh, options: &SolveOptions) -> SolverResult<RodSolution> {
    let _span = debug_span!(
        "solve",
        nodes = mesh.node_count(),
        elements = mesh.element_count()
    )
    .entered();
    let start = Instant::now();

    if mesh.element_count() == 0 {
        return Err(SolverError::DegenerateMesh {
            what: "mesh has no elements".to_string(),
        });
    }

    let locals = {
        let _span = debug_span!("locals").entered();
        build_locals(mesh)?
    };

    let system = {
        let _span = debug_span!("assemble").entered();
        assemble_mesh(mesh, &locals)?
    };
    debug!(size = system.size(), "assembled global system");

    let reduced = {
        let _span = debug_span!("conditions").entered();
        apply_conditions(mesh.neumann(), mesh.dirichlet(), system, options.coincident)?
    };
    debug!(
        size = reduced.size(),
        eliminated = reduced.dof_map.eliminated(),
        "applied boundary conditions"
    );

    let t = {
        let _span = debug_span!("linear", method = ?options.method).entered();
        solve_linear(&reduced.k, &reduced.b, options.method)?
    };

    let residual_norm = (&reduced.k * &t - &reduced.b).norm();
    debug!(
        residual_norm,
        elapsed_s = start.elapsed().as_secs_f64(),
        "solve complete"
    );

    Ok(RodSolution::new(
        t,
        reduced.dof_map,
        reduced.dirichlet_value,
        residual_norm,
    ))
}
