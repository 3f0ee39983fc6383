use calopt_solver::Catalog;

/// Descriptive statistics of a loaded catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub count: usize,
    pub mean_calories: f64,
    pub mean_price: f64,
    pub min_price: i64,
    pub max_price: i64,
    pub min_calories: i64,
    pub max_calories: i64,
}

impl CatalogSummary {
    /// `None` for an empty catalog
    pub fn of(catalog: &Catalog) -> Option<Self> {
        let first = catalog.items().first()?;
        let mut summary = Self {
            count: catalog.len(),
            mean_calories: 0.0,
            mean_price: 0.0,
            min_price: first.cost,
            max_price: first.cost,
            min_calories: first.benefit,
            max_calories: first.benefit,
        };

        let (mut calories, mut price) = (0.0, 0.0);
        for item in catalog {
            calories += item.benefit as f64;
            price += item.cost as f64;
            summary.min_price = summary.min_price.min(item.cost);
            summary.max_price = summary.max_price.max(item.cost);
            summary.min_calories = summary.min_calories.min(item.benefit);
            summary.max_calories = summary.max_calories.max(item.benefit);
        }
        summary.mean_calories = calories / summary.count as f64;
        summary.mean_price = price / summary.count as f64;

        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calopt_solver::Item;

    #[test]
    fn test_summary() {
        let catalog = Catalog::new(vec![
            Item::new("a", 100, 150),
            Item::new("b", 500, 450),
            Item::new("c", 300, 120),
        ]);
        let summary = CatalogSummary::of(&catalog).unwrap();

        assert_eq!(summary.count, 3);
        assert!((summary.mean_calories - 300.0).abs() < 1e-9);
        assert!((summary.mean_price - 240.0).abs() < 1e-9);
        assert_eq!((summary.min_price, summary.max_price), (120, 450));
        assert_eq!((summary.min_calories, summary.max_calories), (100, 500));
    }

    #[test]
    fn test_empty() {
        assert_eq!(CatalogSummary::of(&Catalog::default()), None);
    }
}
