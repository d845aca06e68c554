//! Product filter predicates.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Active filter predicate set for a listing view.
///
/// Every dimension is independently optional; absent means no constraint.
/// Dimensions are ANDed when matching. Values are accepted as given: a
/// price range with min > max simply matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Category equality.
    pub category: Option<String>,
    /// Inclusive price range (min, max).
    pub price_range: Option<(f64, f64)>,
    /// Minimum rating threshold.
    pub min_rating: Option<f64>,
    /// Brand allow-set.
    pub brands: Option<Vec<String>>,
    /// Only in-stock products.
    pub in_stock: bool,
    /// Only free-shipping products.
    pub free_shipping: bool,
    /// Only discounted products.
    pub on_sale: bool,
}

impl FilterState {
    /// Whether a product passes every active dimension.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }

        if let Some((min, max)) = self.price_range {
            if product.price < min || product.price > max {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if product.rating < min_rating {
                return false;
            }
        }

        if let Some(brands) = &self.brands {
            if !brands.is_empty() && !brands.contains(&product.brand) {
                return false;
            }
        }

        if self.in_stock && !product.in_stock {
            return false;
        }

        if self.free_shipping && !product.shipping_info.free_shipping {
            return false;
        }

        if self.on_sale && !product.is_on_sale() {
            return false;
        }

        true
    }
}
