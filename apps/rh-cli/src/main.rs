mod prompt;
mod report;

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rh_project::Problem;
use rh_solver::{RodSolution, solve_with_options};
use tracing::info;
use tracing_subscriber::EnvFilter;

use report::{OutputFormat, Report};

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] rh_project::ProjectError),

    #[error("Solver error: {0}")]
    Solver(#[from] rh_solver::SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid input: {what}")]
    Input { what: String },
}

#[derive(Parser)]
#[command(name = "rodheat")]
#[command(about = "rodheat - 1D steady-state heat conduction on a rod", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate problem file syntax and values
    Validate {
        /// Path to the problem file (YAML, or JSON by extension)
        problem_path: PathBuf,
    },
    /// Solve a problem file
    Solve {
        /// Path to the problem file (YAML, or JSON by extension)
        problem_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print every node on the `T` line, the fixed one included
        #[arg(long)]
        full: bool,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Enter a problem interactively and solve it
    Prompt {
        /// Print every node on the `T` line, the fixed one included
        #[arg(long)]
        full: bool,
    },
    /// Write an example problem file
    Template {
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { problem_path } => cmd_validate(&problem_path),
        Commands::Solve {
            problem_path,
            format,
            full,
            output,
        } => cmd_solve(&problem_path, format, full, output.as_deref()),
        Commands::Prompt { full } => cmd_prompt(full),
        Commands::Template { output } => cmd_template(output.as_deref()),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_validate(problem_path: &Path) -> CliResult<()> {
    println!("Validating problem: {}", problem_path.display());
    let problem = rh_project::load(problem_path)?;
    problem.to_mesh()?;
    println!("✓ Problem is valid");
    Ok(())
}

fn cmd_solve(
    problem_path: &Path,
    format: OutputFormat,
    full: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    let problem = rh_project::load(problem_path)?;
    let (mesh, solution) = run(&problem)?;
    let report = Report::new(&problem.name, &mesh, &solution);

    if let Some(path) = output {
        let mut buf = Vec::new();
        report.write(format, full, &mut buf)?;
        std::fs::write(path, buf)?;
        println!(
            "✓ Wrote {} node temperatures to {}",
            report.nodes.len(),
            path.display()
        );
    } else {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        report.write(format, full, &mut lock)?;
        lock.flush()?;
    }
    Ok(())
}

fn cmd_prompt(full: bool) -> CliResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let problem = prompt::read_problem(&mut input, &mut out)?;
    let (mesh, solution) = run(&problem)?;
    writeln!(out)?;
    Report::new(&problem.name, &mesh, &solution).write(OutputFormat::Text, full, &mut out)?;
    out.flush()?;
    Ok(())
}

fn cmd_template(output: Option<&Path>) -> CliResult<()> {
    let problem = Problem::example();
    if let Some(path) = output {
        rh_project::save(path, &problem)?;
        println!("✓ Wrote example problem to {}", path.display());
    } else {
        print!("{}", serde_yaml::to_string(&problem)?);
    }
    Ok(())
}

fn run(problem: &Problem) -> CliResult<(rh_mesh::Mesh, RodSolution)> {
    let start = Instant::now();
    let mesh = problem.to_mesh()?;
    let solution = solve_with_options(&mesh, &problem.solve_options())?;
    info!(
        nodes = mesh.node_count(),
        residual = solution.residual_norm,
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "Solved {}",
        problem.name
    );
    Ok((mesh, solution))
}
