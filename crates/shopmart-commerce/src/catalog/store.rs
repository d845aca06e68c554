//! The catalog store: lookup and the search/filter/sort query operation.

use crate::browse::{FilterState, SortState};
use crate::catalog::{seed_products, Product};
use crate::ids::ProductId;

/// Holds the session's product records.
///
/// Seeded once at startup and immutable for the session. All query
/// operations are total: an unknown id or a query with no matches yields
/// an empty result, never an error.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog over the given records.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create a catalog seeded with the demo product set.
    pub fn with_seed_data() -> Self {
        Self::new(seed_products())
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in a category, in insertion order.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct category names, first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for p in &self.products {
            if !seen.contains(&p.category) {
                seen.push(p.category.clone());
            }
        }
        seen
    }

    /// Highly rated products for the landing page (rating >= 4.7, first 8).
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.rating >= 4.7)
            .take(8)
            .collect()
    }

    /// Products in the flash sale.
    pub fn flash_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_flash_sale).collect()
    }

    /// Recommended products: rating >= 4.5, highest rated first, first 12.
    pub fn recommended(&self) -> Vec<&Product> {
        let mut picks: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.rating >= 4.5)
            .collect();
        picks.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal));
        picks.truncate(12);
        picks
    }

    /// Search and filter, preserving insertion order.
    ///
    /// The query is a case-insensitive substring match against name,
    /// description, any tag, or brand (OR across fields); an empty query
    /// matches everything. Filter dimensions are ANDed on top.
    pub fn search(&self, query: &str, filters: &FilterState) -> Vec<Product> {
        let query_lower = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| query_lower.is_empty() || p.matches_query(&query_lower))
            .filter(|p| filters.matches(p))
            .cloned()
            .collect()
    }

    /// Search, filter, then stable-sort per the active sort state.
    pub fn search_sorted(
        &self,
        query: &str,
        filters: &FilterState,
        sort: &SortState,
    ) -> Vec<Product> {
        let mut results = self.search(query, filters);
        sort.apply(&mut results);
        results
    }
}
