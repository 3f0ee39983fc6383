use std::io::{BufRead, Write};

use calopt_solver::{Item, Solver};
use tracing::debug;

use crate::error::{describe_solve_error, CliError};
use crate::report::{write_result, OutputFormat};

/// Prompt loop that reads budgets and prints an optimization for each
pub struct Session<'a> {
    pub solver: &'a Solver,
    pub items: &'a [Item],
    /// Budgets above this need an explicit `y` before solving
    pub confirm_above: i64,
    pub format: OutputFormat,
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

impl Session<'_> {
    /// Run until `quit`/`q`/`exit` or end of input
    pub fn run(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
        loop {
            write!(out, "\nEnter your budget in yen (or 'quit' to exit): ")?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                writeln!(out, "\nExiting...")?;
                return Ok(());
            };
            if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
                return Ok(());
            }

            let Ok(budget) = line.parse::<i64>() else {
                writeln!(out, "Please enter a valid number.")?;
                continue;
            };
            if budget <= 0 {
                writeln!(out, "Please enter a positive budget amount.")?;
                continue;
            }
            if budget > self.confirm_above {
                writeln!(out, "Budget seems quite high. Are you sure? (y/n)")?;
                out.flush()?;
                match read_line(input)? {
                    Some(answer) if answer.eq_ignore_ascii_case("y") => {}
                    Some(_) => continue,
                    None => return Ok(()),
                }
            }

            debug!(budget, "Interactive solve");
            match self.solver.solve(self.items, budget) {
                Ok(result) => write_result(out, &result, self.format)?,
                Err(e) => writeln!(out, "{}", describe_solve_error(&e))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(solver: &Solver, input: &str) -> String {
        let items = vec![
            Item::new("A", 3, 2),
            Item::new("B", 4, 3),
            Item::new("C", 5, 4),
            Item::new("D", 6, 5),
        ];
        let session = Session {
            solver,
            items: &items,
            confirm_above: 50,
            format: OutputFormat::Pretty,
        };
        let mut out = Vec::new();
        session.run(&mut Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_solves_and_quits() {
        let text = run_session(&Solver::new(), "5\nquit\n8\n");

        println!("{}", text);

        assert!(text.contains("Maximum Calories: 7 kcal"));
        assert_eq!(text.matches("CALORIE OPTIMIZATION RESULTS").count(), 1);
        assert!(!text.contains("Exiting..."));
    }

    #[test]
    fn test_rejects_bad_input() {
        let text = run_session(&Solver::new(), "abc\n0\n-20\nQ\n");
        assert!(text.contains("Please enter a valid number."));
        assert_eq!(text.matches("Please enter a positive budget amount.").count(), 2);
        assert!(!text.contains("CALORIE OPTIMIZATION RESULTS"));
    }

    #[test]
    fn test_large_budget_confirmation() {
        let text = run_session(&Solver::new(), "100\nn\n100\nY\nexit\n");
        assert_eq!(text.matches("Budget seems quite high").count(), 2);
        assert_eq!(text.matches("CALORIE OPTIMIZATION RESULTS").count(), 1);
        assert!(text.contains("Maximum Calories: 18 kcal"));
    }

    #[test]
    fn test_end_of_input() {
        let text = run_session(&Solver::new(), "5\n");
        assert!(text.contains("Maximum Calories: 7 kcal"));
        assert!(text.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_solver_error_is_reported() {
        let solver = Solver::new().with_max_cells(10);
        let text = run_session(&solver, "20\nquit\n");
        assert!(text.contains("The optimizer ran out of resources"));
    }
}
