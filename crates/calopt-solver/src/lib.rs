mod item;
mod knapsack;
mod ranking;
mod result;
mod scenario;

pub use item::{Catalog, Item};
pub use knapsack::{SolveError, Solver};
pub use ranking::{compare_efficiency, sort_by_efficiency, top_k};
pub use result::SolveResult;
pub use scenario::Scenario;
