//! Problem file schema definitions.

use rh_core::{NodeId, m, w_per_m_k};
use rh_mesh::{BoundaryCondition, Mesh, Parameters};
use rh_solver::{CoincidentPolicy, SolveMethod, SolveOptions};
use serde::{Deserialize, Serialize};

use crate::ProjectResult;

pub const LATEST_VERSION: u32 = 1;

/// One rod problem: parameters, node count and the two conditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    pub version: u32,
    pub name: String,
    pub parameters: ParametersDef,
    /// Number of equally spaced nodes.
    pub nodes: usize,
    pub dirichlet: ConditionDef,
    pub neumann: ConditionDef,
    #[serde(default, skip_serializing_if = "SolverDef::is_default")]
    pub solver: SolverDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParametersDef {
    /// Element length
    pub l: f64,
    /// Conductivity
    pub k: f64,
    /// Volumetric heat source
    #[serde(alias = "Q")]
    pub q: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConditionDef {
    /// 1-based node id
    pub node: u32,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolverDef {
    #[serde(default)]
    pub method: MethodDef,
    #[serde(default)]
    pub coincident_conditions: CoincidentDef,
}

impl SolverDef {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MethodDef {
    #[default]
    Lu,
    Inverse,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoincidentDef {
    #[default]
    Preserve,
    Reject,
}

impl Problem {
    /// Small example used by `template` and tests.
    pub fn example() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "Insulated rod with end flux".to_string(),
            parameters: ParametersDef {
                l: 0.5,
                k: 2.0,
                q: 1.0,
            },
            nodes: 5,
            dirichlet: ConditionDef {
                node: 1,
                value: 0.0,
            },
            neumann: ConditionDef {
                node: 5,
                value: 5.0,
            },
            solver: SolverDef::default(),
        }
    }

    /// Build the mesh: nodes at `(id - 1) * l`, one element per consecutive pair.
    pub fn to_mesh(&self) -> ProjectResult<Mesh> {
        let p = &self.parameters;
        // File values are SI: l in m, k in W/(m·K), q in W/m³
        let parameters = Parameters::from_quantities(m(p.l), w_per_m_k(p.k), p.q)
            .map_err(rh_mesh::MeshError::from)?;
        let dirichlet = condition(&self.dirichlet)?;
        let neumann = condition(&self.neumann)?;
        Ok(Mesh::uniform(parameters, self.nodes, dirichlet, neumann)?)
    }

    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            method: match self.solver.method {
                MethodDef::Lu => SolveMethod::Lu,
                MethodDef::Inverse => SolveMethod::Inverse,
            },
            coincident: match self.solver.coincident_conditions {
                CoincidentDef::Preserve => CoincidentPolicy::Preserve,
                CoincidentDef::Reject => CoincidentPolicy::Reject,
            },
        }
    }
}

fn condition(def: &ConditionDef) -> ProjectResult<BoundaryCondition> {
    let node = NodeId::new(def.node).map_err(rh_mesh::MeshError::from)?;
    Ok(BoundaryCondition::new(node, def.value))
}
