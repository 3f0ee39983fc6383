use crate::item::Item;

/// The outcome of one knapsack solve
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Budget the solve was run with
    pub budget: i64,
    /// Optimal total benefit
    pub max_benefit: i64,
    /// Sum of the selected items' costs (never above the budget)
    pub total_cost: i64,
    /// Budget left over after buying the selection
    pub remaining_budget: i64,
    /// One optimal subset, ordered by descending efficiency for display
    pub selected: Vec<Item>,
    /// Number of selected items
    pub num_items: usize,
    /// Total benefit per unit of total cost (0 for an empty selection)
    pub benefit_per_cost: f64,
}

impl SolveResult {
    /// Result for a selection that has already been reconstructed and ordered
    pub fn from_selection(budget: i64, max_benefit: i64, selected: Vec<Item>) -> Self {
        let total_cost: i64 = selected.iter().map(|item| item.cost).sum();
        let benefit_per_cost = if total_cost > 0 {
            max_benefit as f64 / total_cost as f64
        } else {
            0.0
        };

        Self {
            budget,
            max_benefit,
            total_cost,
            remaining_budget: budget - total_cost,
            num_items: selected.len(),
            selected,
            benefit_per_cost,
        }
    }

    pub fn empty(budget: i64) -> Self {
        Self::from_selection(budget, 0, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = SolveResult::empty(500);
        assert_eq!(result.max_benefit, 0);
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.remaining_budget, 500);
        assert_eq!(result.num_items, 0);
        assert_eq!(result.benefit_per_cost, 0.0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_derived_fields() {
        let selected = vec![Item::new("a", 300, 100), Item::new("b", 250, 150)];
        let result = SolveResult::from_selection(400, 550, selected);
        assert_eq!(result.total_cost, 250);
        assert_eq!(result.remaining_budget, 150);
        assert_eq!(result.num_items, 2);
        assert!((result.benefit_per_cost - 2.2).abs() < 1e-9);
    }
}
