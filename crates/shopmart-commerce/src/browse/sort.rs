//! Listing sort state.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Price,
    Rating,
    Name,
    #[default]
    CreatedAt,
}

impl SortField {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortField::Price => "Price",
            SortField::Rating => "Rating",
            SortField::Name => "Name",
            SortField::CreatedAt => "Newest",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Active sort key and direction. Defaults to newest-first, the initial
/// listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two products under this sort state.
    ///
    /// Name comparison is case-insensitive code-point order, not locale
    /// collation, so accented or non-Latin names may order differently
    /// than a locale-aware sort would place them. Numeric fields compare
    /// numerically. Descending flips the comparator sign.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.field {
            SortField::Price => numeric(a.price, b.price),
            SortField::Rating => numeric(a.rating, b.rating),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Sort a product list in place.
    ///
    /// Stable: products that compare equal keep their prior relative
    /// order.
    pub fn apply(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

fn numeric(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product(id: u64, name: &str, price: f64, rating: f64, created_at: i64) -> Product {
        let mut p = Product::new(ProductId::new(id), name, price);
        p.rating = rating;
        p.created_at = created_at;
        p
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_price_ascending() {
        let mut products = vec![
            product(1, "A", 30.0, 4.0, 100),
            product(2, "B", 10.0, 4.5, 200),
            product(3, "C", 20.0, 3.5, 300),
        ];
        SortState::new(SortField::Price, SortDirection::Ascending).apply(&mut products);
        assert_eq!(ids(&products), vec![2, 3, 1]);
    }

    #[test]
    fn test_descending_flips_comparator() {
        let mut products = vec![
            product(1, "A", 30.0, 4.0, 100),
            product(2, "B", 10.0, 4.5, 200),
        ];
        SortState::new(SortField::Rating, SortDirection::Descending).apply(&mut products);
        assert_eq!(ids(&products), vec![2, 1]);
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let mut products = vec![
            product(1, "zebra", 1.0, 4.0, 100),
            product(2, "Apple", 1.0, 4.0, 200),
            product(3, "mango", 1.0, 4.0, 300),
        ];
        SortState::new(SortField::Name, SortDirection::Ascending).apply(&mut products);
        assert_eq!(ids(&products), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_preserve_prior_order() {
        let mut products = vec![
            product(7, "A", 1199.0, 4.8, 100),
            product(8, "B", 1199.0, 4.7, 200),
            product(9, "C", 349.0, 4.6, 300),
        ];
        SortState::new(SortField::Price, SortDirection::Ascending).apply(&mut products);
        // 7 and 8 tie on price and keep their relative order.
        assert_eq!(ids(&products), vec![9, 7, 8]);
    }

    #[test]
    fn test_default_is_newest_first() {
        let mut products = vec![
            product(1, "A", 1.0, 4.0, 100),
            product(2, "B", 1.0, 4.0, 300),
            product(3, "C", 1.0, 4.0, 200),
        ];
        SortState::default().apply(&mut products);
        assert_eq!(ids(&products), vec![2, 3, 1]);
    }
}
