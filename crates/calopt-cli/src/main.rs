mod error;
mod report;
mod session;

use std::io::{self, Write};
use std::path::PathBuf;

use calopt_catalog::{CatalogSummary, Cleaned};
use calopt_solver::{top_k, Solver};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::report::OutputFormat;
use crate::session::Session;

const DEFAULT_BUDGETS: [i64; 6] = [500, 1000, 1500, 2000, 3000, 5000];

#[derive(Parser)]
#[command(name = "calopt")]
#[command(about = "Find the most calories a budget can buy", long_about = None)]
struct Cli {
    /// Catalog file (CSV with name,calories,price columns, or JSON)
    #[arg(long, global = true, env = "CALOPT_CATALOG", default_value = "lawson_food_data.csv")]
    catalog: PathBuf,
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
    /// Ask for confirmation before solving interactive budgets above this
    #[arg(long, global = true, env = "CALOPT_CONFIRM_ABOVE", default_value_t = 50_000)]
    confirm_above: i64,
    /// Refuse budgets whose table would need more than this many cells
    #[arg(long, global = true, env = "CALOPT_MAX_CELLS")]
    max_cells: Option<usize>,
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a single budget
    Solve {
        /// Budget in yen
        #[arg(allow_negative_numbers = true)]
        budget: i64,
    },
    /// Compare the optimum across several budgets
    Scenarios {
        /// Budgets in yen
        #[arg(allow_negative_numbers = true, default_values_t = DEFAULT_BUDGETS)]
        budgets: Vec<i64>,
    },
    /// List the most calorie-efficient items
    Top {
        /// Number of items to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// Load the catalog and report what was kept and dropped
    Check,
    /// Prompt for budgets until quit
    Interactive,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info,calopt_solver=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cleaned { catalog, dropped } = calopt_catalog::load_catalog(&cli.catalog)?;

    let mut solver = Solver::new();
    if let Some(cells) = cli.max_cells {
        solver = solver.with_max_cells(cells);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let items = catalog.items();
    let session = Session {
        solver: &solver,
        items,
        confirm_above: cli.confirm_above,
        format: cli.format,
    };

    match cli.command {
        Some(Commands::Solve { budget }) => {
            let result = solver.solve(items, budget)?;
            report::write_result(&mut out, &result, cli.format)?;
        }
        Some(Commands::Scenarios { budgets }) => {
            let scenarios = solver.analyze(items, &budgets);
            report::write_scenarios(&mut out, &scenarios, cli.format)?;
        }
        Some(Commands::Top { count }) => {
            report::write_top_items(&mut out, &top_k(items, count), count, cli.format)?;
        }
        Some(Commands::Check) => {
            let summary = CatalogSummary::of(&catalog);
            report::write_check(&mut out, summary.as_ref(), &dropped, cli.format)?;
        }
        Some(Commands::Interactive) => {
            session.run(&mut io::stdin().lock(), &mut out)?;
        }
        None => {
            if cli.format == OutputFormat::Pretty {
                writeln!(out, "Calorie Optimizer")?;
                writeln!(out, "Using Dynamic Programming Knapsack Algorithm")?;
                writeln!(out, "\nLoaded {} food items from {}", catalog.len(), cli.catalog.display())?;
            }

            report::write_top_items(&mut out, &top_k(items, 10), 10, cli.format)?;
            let scenarios = solver.analyze(items, &DEFAULT_BUDGETS);
            report::write_scenarios(&mut out, &scenarios, cli.format)?;

            if cli.format == OutputFormat::Pretty {
                writeln!(out, "\n{}", "=".repeat(60))?;
                writeln!(out, "INTERACTIVE BUDGET OPTIMIZER")?;
                writeln!(out, "{}", "=".repeat(60))?;
            }
            session.run(&mut io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["calopt", "scenarios"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.confirm_above, 50_000);
        match cli.command {
            Some(Commands::Scenarios { budgets }) => assert_eq!(budgets, DEFAULT_BUDGETS.to_vec()),
            _ => panic!("expected scenarios"),
        }
    }

    #[test]
    fn test_parse_negative_budget() {
        let cli = Cli::try_parse_from(["calopt", "--format", "json", "solve", "-1"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Some(Commands::Solve { budget: -1 })));
    }

    #[test]
    fn test_rejects_non_numeric_budget() {
        assert!(Cli::try_parse_from(["calopt", "solve", "lots"]).is_err());
    }

    #[test]
    fn test_no_subcommand_runs_session() {
        let cli = Cli::try_parse_from(["calopt", "--catalog", "foods.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.catalog, PathBuf::from("foods.json"));
    }
}
