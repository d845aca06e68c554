//! Session listing state: query + filters + sort and the visible list.

use crate::browse::{FilterState, SortDirection, SortField, SortState};
use crate::catalog::{Catalog, Product};
use std::rc::Rc;

/// View state behind a product listing.
///
/// Owns the active query, filter set, and sort state, and recomputes the
/// visible product list whenever any of them changes. Each setter
/// replaces exactly one dimension. The listing shares the session's
/// catalog through an `Rc`; like every store here it is owned by a single
/// UI session and accessed single-threaded.
pub struct Listing {
    catalog: Rc<Catalog>,
    query: String,
    filters: FilterState,
    sort: SortState,
    visible: Vec<Product>,
}

impl Listing {
    /// Create a listing over a catalog, showing everything in the default
    /// newest-first order.
    pub fn new(catalog: Rc<Catalog>) -> Self {
        let mut listing = Self {
            catalog,
            query: String::new(),
            filters: FilterState::default(),
            sort: SortState::default(),
            visible: Vec::new(),
        };
        listing.recompute();
        listing
    }

    /// The currently visible products.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filters.category = category;
        self.recompute();
    }

    /// Replace the price range. Accepted as given; an inverted range
    /// yields an empty listing rather than an error.
    pub fn set_price_range(&mut self, range: Option<(f64, f64)>) {
        self.filters.price_range = range;
        self.recompute();
    }

    pub fn set_min_rating(&mut self, min_rating: Option<f64>) {
        self.filters.min_rating = min_rating;
        self.recompute();
    }

    pub fn set_brands(&mut self, brands: Option<Vec<String>>) {
        self.filters.brands = brands;
        self.recompute();
    }

    pub fn set_in_stock_only(&mut self, on: bool) {
        self.filters.in_stock = on;
        self.recompute();
    }

    pub fn set_free_shipping_only(&mut self, on: bool) {
        self.filters.free_shipping = on;
        self.recompute();
    }

    pub fn set_on_sale_only(&mut self, on: bool) {
        self.filters.on_sale = on;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.recompute();
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort.field = field;
        self.recompute();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort.direction = direction;
        self.recompute();
    }

    /// Restore defaults for query, filters, and sort.
    pub fn reset_filters(&mut self) {
        self.query.clear();
        self.filters = FilterState::default();
        self.sort = SortState::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = self
            .catalog
            .search_sorted(&self.query, &self.filters, &self.sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing::new(Rc::new(Catalog::with_seed_data()))
    }

    fn visible_ids(listing: &Listing) -> Vec<u64> {
        listing.visible().iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_initial_listing_is_newest_first() {
        let listing = listing();
        assert_eq!(visible_ids(&listing), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_query_setter_recomputes() {
        let mut listing = listing();
        listing.set_query("apple");
        assert_eq!(visible_ids(&listing), vec![1, 3]);

        listing.set_query("");
        assert_eq!(listing.visible().len(), 4);
    }

    #[test]
    fn test_setters_replace_one_dimension() {
        let mut listing = listing();
        listing.set_brands(Some(vec!["Apple".to_string()]));
        listing.set_price_range(Some((1000.0, 1250.0)));
        assert_eq!(visible_ids(&listing), vec![1]);

        // Replacing the brand set keeps the price range.
        listing.set_brands(Some(vec!["Samsung".to_string()]));
        assert_eq!(visible_ids(&listing), vec![2]);
    }

    #[test]
    fn test_inverted_price_range_empties_listing() {
        let mut listing = listing();
        listing.set_price_range(Some((500.0, 100.0)));
        assert!(listing.visible().is_empty());
    }

    #[test]
    fn test_sort_setter() {
        let mut listing = listing();
        listing.set_sort(SortState::new(SortField::Price, SortDirection::Ascending));
        assert_eq!(visible_ids(&listing), vec![4, 1, 2, 3]);

        listing.set_sort_direction(SortDirection::Descending);
        assert_eq!(visible_ids(&listing), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut listing = listing();
        listing.set_query("sony");
        listing.set_min_rating(Some(4.9));
        listing.set_sort_field(SortField::Name);

        listing.reset_filters();
        assert_eq!(listing.filters(), &FilterState::default());
        assert_eq!(visible_ids(&listing), vec![1, 3, 2, 4]);
    }
}
