use tracing::debug;

use crate::item::Item;
use crate::knapsack::{SolveError, Solver};
use crate::result::SolveResult;

/// Outcome of solving one budget in a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub budget: i64,
    pub outcome: Result<SolveResult, SolveError>,
}

impl Scenario {
    pub fn result(&self) -> Option<&SolveResult> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&SolveError> {
        self.outcome.as_ref().err()
    }
}

impl Solver {
    /// Solve each budget independently, in input order.
    ///
    /// A failing budget is recorded in its own scenario and the sweep continues.
    pub fn analyze(&self, items: &[Item], budgets: &[i64]) -> Vec<Scenario> {
        budgets
            .iter()
            .map(|&budget| {
                let outcome = self.solve(items, budget);
                if let Err(e) = &outcome {
                    debug!(budget, error = %e, "Scenario failed");
                }
                Scenario { budget, outcome }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_catalog() -> Vec<Item> {
        vec![
            Item::new("A", 3, 2),
            Item::new("B", 4, 3),
            Item::new("C", 5, 4),
            Item::new("D", 6, 5),
        ]
    }

    #[test]
    fn test_budget_sweep() {
        let scenarios = Solver::new().analyze(&textbook_catalog(), &[0, 5, 100]);

        let budgets: Vec<i64> = scenarios.iter().map(|s| s.budget).collect();
        let benefits: Vec<i64> = scenarios
            .iter()
            .map(|s| s.result().unwrap().max_benefit)
            .collect();

        assert_eq!(budgets, vec![0, 5, 100]);
        assert_eq!(benefits, vec![0, 7, 18]);
    }

    #[test]
    fn test_keeps_input_order() {
        let scenarios = Solver::new().analyze(&textbook_catalog(), &[100, 0, 5]);
        let benefits: Vec<i64> = scenarios
            .iter()
            .map(|s| s.result().unwrap().max_benefit)
            .collect();
        assert_eq!(benefits, vec![18, 0, 7]);
    }

    #[test]
    fn test_failed_budget_does_not_stop_sweep() {
        let scenarios = Solver::new().analyze(&textbook_catalog(), &[5, -10, 9]);

        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].result().unwrap().max_benefit, 7);
        assert_eq!(
            scenarios[1].error(),
            Some(&SolveError::InvalidBudget { budget: -10 })
        );
        assert!(scenarios[1].result().is_none());
        assert_eq!(scenarios[2].result().unwrap().max_benefit, 12);
    }

    #[test]
    fn test_matches_individual_solves() {
        let solver = Solver::new();
        let items = textbook_catalog();
        for scenario in solver.analyze(&items, &[3, 7, 11]) {
            assert_eq!(scenario.outcome, solver.solve(&items, scenario.budget));
        }
    }

    #[test]
    fn test_empty_sweep() {
        assert!(Solver::new().analyze(&textbook_catalog(), &[]).is_empty());
    }
}
