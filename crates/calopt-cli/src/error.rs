use std::io;

use calopt_catalog::CatalogError;
use calopt_solver::SolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("{}", describe_solve_error(.0))]
    Solve(#[from] SolveError),
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-facing message that says whether the input was rejected or resources ran out
pub fn describe_solve_error(e: &SolveError) -> String {
    match e {
        SolveError::InvalidBudget { .. }
        | SolveError::InvalidItem { .. }
        | SolveError::BenefitOverflow { .. } => {
            format!("The optimizer rejected the input: {}", e)
        }
        SolveError::ResourceExhaustion { .. } => {
            format!("The optimizer ran out of resources: {}", e)
        }
    }
}
