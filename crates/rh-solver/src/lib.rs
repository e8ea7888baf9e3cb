//! Steady-state heat conduction solver for a 1D rod.
//!
//! Linear finite elements on an equally spaced node chain: local stiffness
//! and load per element, scatter-add assembly, Neumann flux addition and
//! Dirichlet elimination, then a direct solve for the free temperatures.

pub mod assembly;
pub mod conditions;
pub mod error;
pub mod linear;
pub mod local;
pub mod solution;
pub mod solve;

pub use assembly::{GlobalSystem, assemble, assemble_mesh};
pub use conditions::{CoincidentPolicy, DofMap, ReducedSystem, apply_conditions};
pub use error::{SolverError, SolverResult};
pub use linear::{SolveMethod, solve_linear};
pub use local::{LocalContribution, build_locals, local_load, local_stiffness};
pub use solution::RodSolution;
pub use solve::{SolveOptions, solve, solve_with_options};
