//! Interactive console input.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rh_project::{ConditionDef, LATEST_VERSION, ParametersDef, Problem, SolverDef};

use crate::{CliError, CliResult};

/// Ask for `l k Q`, the node count and both conditions, in that order.
pub fn read_problem<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> CliResult<Problem> {
    let [l, k, q] = ask::<f64, 3, _, _>(
        input,
        out,
        "Enter the model parameters separated by spaces (l k Q): ",
    )?;
    let [nodes] = ask::<usize, 1, _, _>(input, out, "Enter the number of nodes: ")?;
    let dirichlet = ask_condition(
        input,
        out,
        "Enter the Dirichlet condition separated by spaces (node_id value): ",
    )?;
    let neumann = ask_condition(
        input,
        out,
        "Enter the Neumann condition separated by spaces (node_id value): ",
    )?;

    let problem = Problem {
        version: LATEST_VERSION,
        name: "interactive".to_string(),
        parameters: ParametersDef { l, k, q },
        nodes,
        dirichlet,
        neumann,
        solver: SolverDef::default(),
    };
    rh_project::validate_problem(&problem).map_err(rh_project::ProjectError::from)?;
    Ok(problem)
}

fn ask_condition<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> CliResult<ConditionDef> {
    let line = prompt_line(input, out, message)?;
    let mut fields = line.split_whitespace();
    let (Some(node), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(CliError::Input {
            what: format!("expected `node_id value`, got `{}`", line.trim()),
        });
    };
    Ok(ConditionDef {
        node: parse(node)?,
        value: parse(value)?,
    })
}

fn ask<T, const N: usize, R, W>(input: &mut R, out: &mut W, message: &str) -> CliResult<[T; N]>
where
    T: FromStr + Copy + Default,
    R: BufRead,
    W: Write,
{
    let line = prompt_line(input, out, message)?;
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != N {
        return Err(CliError::Input {
            what: format!(
                "expected {} value(s), got {} in `{}`",
                N,
                fields.len(),
                line.trim()
            ),
        });
    }
    let mut values = [T::default(); N];
    for (slot, field) in values.iter_mut().zip(fields) {
        *slot = parse(field)?;
    }
    Ok(values)
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> CliResult<String> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::Input {
            what: "unexpected end of input".to_string(),
        });
    }
    Ok(line)
}

fn parse<T: FromStr>(field: &str) -> CliResult<T> {
    field.parse().map_err(|_| CliError::Input {
        what: format!("cannot parse `{}`", field),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_in_console_order() {
        let mut input = Cursor::new("0.5 2 1\n5\n1 0\n5 5.5\n");
        let mut out = Vec::new();
        let problem = read_problem(&mut input, &mut out).unwrap();

        assert_eq!(problem.parameters.l, 0.5);
        assert_eq!(problem.parameters.k, 2.0);
        assert_eq!(problem.parameters.q, 1.0);
        assert_eq!(problem.nodes, 5);
        assert_eq!(problem.dirichlet.node, 1);
        assert_eq!(problem.neumann.value, 5.5);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("(l k Q)"));
        assert!(shown.contains("Neumann"));
    }

    #[test]
    fn wrong_field_count() {
        let mut input = Cursor::new("0.5 2\n");
        let err = read_problem(&mut input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }

    #[test]
    fn bad_number() {
        let mut input = Cursor::new("0.5 2 x\n");
        assert!(read_problem(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn truncated_input() {
        let mut input = Cursor::new("1 1 0\n3\n");
        let err = read_problem(&mut input, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: unexpected end of input");
    }

    #[test]
    fn out_of_range_node_fails_validation() {
        let mut input = Cursor::new("1 1 0\n3\n4 0\n3 1\n");
        let err = read_problem(&mut input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Project(_)));
    }
}
