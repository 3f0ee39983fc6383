use std::collections::HashSet;

use calopt_solver::{Catalog, Item};
use tracing::debug;

use crate::record::RawRecord;

/// How many raw records were discarded, by reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropReport {
    /// Missing name, calories or price
    pub incomplete: usize,
    /// Calories or price of zero or less
    pub non_positive: usize,
    /// Later records repeating an earlier name
    pub duplicates: usize,
}

impl DropReport {
    pub fn total(&self) -> usize {
        self.incomplete + self.non_positive + self.duplicates
    }
}

#[derive(Debug, Clone)]
pub struct Cleaned {
    pub catalog: Catalog,
    pub dropped: DropReport,
}

/// Turn raw records into a catalog of valid items.
///
/// Incomplete and non-positive records are dropped, then repeated names keep
/// only their first occurrence. Surviving records stay in source order.
pub fn clean(records: impl IntoIterator<Item = RawRecord>) -> Cleaned {
    let mut dropped = DropReport::default();
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for record in records {
        let (Some(name), Some(calories), Some(price)) = (record.name, record.calories, record.price) else {
            debug!(position = record.position, "Dropping incomplete record");
            dropped.incomplete += 1;
            continue;
        };
        if calories <= 0 || price <= 0 {
            debug!(position = record.position, name = %name, calories, price, "Dropping non-positive record");
            dropped.non_positive += 1;
            continue;
        }
        if !seen.insert(name.clone()) {
            debug!(position = record.position, name = %name, "Dropping duplicate record");
            dropped.duplicates += 1;
            continue;
        }
        items.push(Item::new(name, calories, price));
    }

    Cleaned {
        catalog: Catalog::new(items),
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        let records = vec![
            RawRecord::new(2, "Karaage-kun", 220, 238),
            RawRecord::new(3, "Water", 0, 110),
            RawRecord::new(4, "Refund", 100, -50),
            RawRecord {
                position: 5,
                name: None,
                calories: Some(300),
                price: Some(200),
            },
            RawRecord::new(6, "Karaage-kun", 250, 260),
            RawRecord::new(7, "Melon Pan", 400, 160),
        ];
        let cleaned = clean(records);

        let items = cleaned.catalog.items();
        assert_eq!(
            items,
            &[Item::new("Karaage-kun", 220, 238), Item::new("Melon Pan", 400, 160)]
        );
        assert_eq!(
            cleaned.dropped,
            DropReport {
                incomplete: 1,
                non_positive: 2,
                duplicates: 1,
            }
        );
        assert_eq!(cleaned.dropped.total(), 4);
    }

    #[test]
    fn test_invalid_first_occurrence_does_not_shadow_name() {
        let records = vec![
            RawRecord::new(2, "Salad", 0, 300),
            RawRecord::new(3, "Salad", 90, 300),
        ];
        let cleaned = clean(records);
        assert_eq!(cleaned.catalog.items(), &[Item::new("Salad", 90, 300)]);
        assert_eq!(cleaned.dropped.duplicates, 0);
    }

    #[test]
    fn test_boundary_values_kept() {
        let cleaned = clean(vec![RawRecord::new(2, "Gum", 1, 1)]);
        assert_eq!(cleaned.catalog.len(), 1);
        assert_eq!(cleaned.dropped.total(), 0);
    }
}
