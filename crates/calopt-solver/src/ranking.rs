use std::cmp::Ordering;

use crate::item::Item;

/// Order two items by descending benefit/cost ratio.
///
/// Ratios are compared by cross-multiplication, so equal ratios compare `Equal`
/// exactly. Both items are expected to have a positive cost.
pub fn compare_efficiency(a: &Item, b: &Item) -> Ordering {
    let lhs = a.benefit as i128 * b.cost as i128;
    let rhs = b.benefit as i128 * a.cost as i128;
    rhs.cmp(&lhs)
}

/// Stable in-place sort by descending efficiency; equal ratios keep their order
pub fn sort_by_efficiency(items: &mut [Item]) {
    items.sort_by(compare_efficiency);
}

/// The `k` most efficient items of a catalog, best first
pub fn top_k(items: &[Item], k: usize) -> Vec<&Item> {
    let mut ranked: Vec<&Item> = items.iter().collect();
    ranked.sort_by(|a, b| compare_efficiency(a, b));
    ranked.truncate(k);
    ranked
}
