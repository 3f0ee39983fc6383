use thiserror::Error;
use tracing::debug;

use crate::item::Item;
use crate::ranking::sort_by_efficiency;
use crate::result::SolveResult;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Invalid budget: {budget} (must be zero or greater)")]
    InvalidBudget { budget: i64 },
    #[error("Invalid item '{name}': cost ({cost}) and benefit ({benefit}) must both be positive")]
    InvalidItem { name: String, cost: i64, benefit: i64 },
    #[error("Cannot allocate a table for {items} items with budget {budget}; try a smaller budget")]
    ResourceExhaustion { items: usize, budget: i64 },
    #[error("Total benefit overflows at item '{name}'; benefits are too large to sum exactly")]
    BenefitOverflow { name: String },
}

/// Exact 0/1 knapsack solver using a full dynamic programming table
#[derive(Debug, Clone, Default)]
pub struct Solver {
    /// Upper bound on table cells, `None` for no limit beyond what the allocator allows
    max_cells: Option<usize>,
}

/// `best[i][w]`: maximum benefit from the first `i` items with total cost <= `w`.
/// Stored row-major in a single allocation.
struct Table {
    width: usize,
    cells: Vec<i64>,
}

impl Table {
    fn allocate(rows: usize, width: usize, max_cells: Option<usize>) -> Option<Self> {
        let len = rows.checked_mul(width)?;
        if max_cells.is_some_and(|max| len > max) {
            return None;
        }

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, 0);
        Some(Self { width, cells })
    }

    fn get(&self, row: usize, w: usize) -> i64 {
        self.cells[row * self.width + w]
    }

    /// Previous row (read-only) and current row (writable) for item row `row`
    fn rows_mut(&mut self, row: usize) -> (&[i64], &mut [i64]) {
        let (done, rest) = self.cells.split_at_mut(row * self.width);
        (&done[(row - 1) * self.width..], &mut rest[..self.width])
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject budgets whose table would exceed `cells` entries
    pub fn with_max_cells(mut self, cells: usize) -> Self {
        self.max_cells = Some(cells);
        self
    }

    /// Find the maximum total benefit within `budget` and one subset achieving it.
    ///
    /// The subset is reconstructed by scanning items from last to first and taking
    /// an item whenever its row differs from the row above at the remaining budget,
    /// so ties resolve the same way for the same catalog order. The returned
    /// selection is then reordered by descending efficiency.
    pub fn solve(&self, items: &[Item], budget: i64) -> Result<SolveResult, SolveError> {
        if budget < 0 {
            return Err(SolveError::InvalidBudget { budget });
        }
        if let Some(item) = items.iter().find(|item| !item.is_valid()) {
            return Err(SolveError::InvalidItem {
                name: item.name.clone(),
                cost: item.cost,
                benefit: item.benefit,
            });
        }
        if items.is_empty() {
            return Ok(SolveResult::empty(budget));
        }

        let exhausted = || SolveError::ResourceExhaustion {
            items: items.len(),
            budget,
        };
        let width = usize::try_from(budget)
            .ok()
            .and_then(|b| b.checked_add(1))
            .ok_or_else(exhausted)?;
        let mut table = Table::allocate(items.len() + 1, width, self.max_cells).ok_or_else(exhausted)?;

        debug!(items = items.len(), budget, cells = table.cells.len(), "Filling knapsack table");
        self.fill(&mut table, items)?;

        let n = items.len();
        let max_benefit = table.get(n, width - 1);
        let mut selected = self.backtrack(&table, items, width - 1);
        sort_by_efficiency(&mut selected);

        let result = SolveResult::from_selection(budget, max_benefit, selected);
        debug!(
            budget,
            max_benefit = result.max_benefit,
            total_cost = result.total_cost,
            num_items = result.num_items,
            "Knapsack solved"
        );
        Ok(result)
    }

    fn fill(&self, table: &mut Table, items: &[Item]) -> Result<(), SolveError> {
        for (i, item) in items.iter().enumerate() {
            let (prev, current) = table.rows_mut(i + 1);
            // Costs above usize::MAX never fit any budget column
            let cost = usize::try_from(item.cost).unwrap_or(usize::MAX);

            for w in 0..current.len() {
                current[w] = prev[w];
                if cost <= w {
                    let taken = prev[w - cost].checked_add(item.benefit).ok_or_else(|| {
                        SolveError::BenefitOverflow {
                            name: item.name.clone(),
                        }
                    })?;
                    current[w] = current[w].max(taken);
                }
            }
        }
        Ok(())
    }

    fn backtrack(&self, table: &Table, items: &[Item], budget: usize) -> Vec<Item> {
        let mut selected = Vec::new();
        let mut w = budget;

        for i in (1..=items.len()).rev() {
            if table.get(i, w) != table.get(i - 1, w) {
                let item = &items[i - 1];
                selected.push(item.clone());
                // A differing row means the item was taken, so it fit in `w`
                w -= item.cost as usize;
            }
        }

        selected
    }
}
