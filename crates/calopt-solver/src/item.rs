/// A candidate item: something with a cost that yields a benefit
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Identifier, usually the product name (not required to be unique)
    pub name: String,
    /// Quantity being maximized (calories)
    pub benefit: i64,
    /// Quantity constrained by the budget (price)
    pub cost: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, benefit: i64, cost: i64) -> Self {
        Self {
            name: name.into(),
            benefit,
            cost,
        }
    }

    /// Benefit per unit of cost, 0 for a zero cost
    pub fn efficiency(&self) -> f64 {
        if self.cost == 0 {
            0.0
        } else {
            self.benefit as f64 / self.cost as f64
        }
    }

    pub fn is_valid(&self) -> bool {
        self.benefit > 0 && self.cost > 0
    }
}

/// An ordered, read-only collection of items.
///
/// Order matters: when several subsets reach the same optimum, the one
/// reconstructed by the solver depends on it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency() {
        assert_eq!(Item::new("onigiri", 180, 120).efficiency(), 1.5);
        assert_eq!(Item::new("free sample", 10, 0).efficiency(), 0.0);
    }

    #[test]
    fn test_validity_boundaries() {
        assert!(Item::new("a", 1, 1).is_valid());
        assert!(!Item::new("b", 0, 1).is_valid());
        assert!(!Item::new("c", 1, 0).is_valid());
        assert!(!Item::new("d", 5, -3).is_valid());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog: Catalog = vec![Item::new("z", 1, 1), Item::new("a", 2, 2)]
            .into_iter()
            .collect();
        let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }
}
