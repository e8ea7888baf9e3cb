//! rh-mesh: mesh model layer for rodheat.
//!
//! Provides:
//! - Core mesh data structures (Node, Element, BoundaryCondition, Mesh)
//! - Incremental mesh builder with validation
//! - Stable id -> index mapping for matrix addressing
//!
//! # Example
//!
//! ```
//! use rh_mesh::{MeshBuilder, Parameters};
//!
//! let mut builder = MeshBuilder::new(Parameters::new(0.5, 1.0, 0.0).unwrap());
//! let n1 = builder.add_node(0.0);
//! let n2 = builder.add_node(0.5);
//! builder.add_element(n1, n2);
//! builder.dirichlet(n1, 0.0).neumann(n2, 5.0);
//! let mesh = builder.build().unwrap();
//!
//! assert_eq!(mesh.nodes().len(), 2);
//! assert_eq!(mesh.elements().len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod indexing;
pub mod mesh;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::MeshBuilder;
pub use error::{MeshError, MeshResult};
pub use indexing::IndexMap;
pub use mesh::{BoundaryCondition, ConditionRole, Element, Mesh, Node, Parameters};
