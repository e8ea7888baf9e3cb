//! Rendering a solved problem as text, JSON or CSV.

use std::io::Write;

use clap::ValueEnum;
use rh_core::Real;
use rh_mesh::Mesh;
use rh_solver::RodSolution;
use serde::Serialize;

use crate::CliResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
pub struct NodeRow {
    pub node: u32,
    pub x: Real,
    pub temperature: Real,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub name: &'a str,
    pub fixed_node: u32,
    pub residual_norm: Real,
    /// Free temperatures as the linear solve returns them
    pub reduced: &'a [Real],
    pub nodes: Vec<NodeRow>,
}

impl<'a> Report<'a> {
    pub fn new(name: &'a str, mesh: &Mesh, solution: &'a RodSolution) -> Self {
        let nodes = mesh
            .nodes()
            .iter()
            .zip(solution.temperatures())
            .map(|(node, &temperature)| NodeRow {
                node: node.id.get(),
                x: node.coord,
                temperature,
            })
            .collect();
        Self {
            name,
            fixed_node: solution.fixed_node().get(),
            residual_norm: solution.residual_norm,
            reduced: solution.reduced(),
            nodes,
        }
    }

    pub fn write<W: Write>(&self, format: OutputFormat, full: bool, out: &mut W) -> CliResult<()> {
        match format {
            OutputFormat::Text => self.write_text(full, out),
            OutputFormat::Json => self.write_json(out),
            OutputFormat::Csv => self.write_csv(out),
        }
    }

    /// `T: [..]` line, then a node table. `full` prints every node on the
    /// `T` line instead of the reduced vector.
    fn write_text<W: Write>(&self, full: bool, out: &mut W) -> CliResult<()> {
        let values: Vec<String> = if full {
            self.nodes.iter().map(|r| r.temperature.to_string()).collect()
        } else {
            self.reduced.iter().map(|t| t.to_string()).collect()
        };
        writeln!(out, "T: [{}]", values.join(", "))?;
        writeln!(out)?;
        writeln!(out, "{:>6}  {:>14}  {:>14}", "node", "x", "T")?;
        for row in &self.nodes {
            let marker = if row.node == self.fixed_node { " *" } else { "" };
            writeln!(
                out,
                "{:>6}  {:>14.6}  {:>14.6}{}",
                row.node, row.x, row.temperature, marker
            )?;
        }
        writeln!(out)?;
        writeln!(out, "* fixed by the Dirichlet condition")?;
        writeln!(out, "residual norm: {:.3e}", self.residual_norm)?;
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, out: &mut W) -> CliResult<()> {
        writeln!(out, "node,x,temperature")?;
        for row in &self.nodes {
            writeln!(out, "{},{},{}", row.node, row.x, row.temperature)?;
        }
        Ok(())
    }
}
