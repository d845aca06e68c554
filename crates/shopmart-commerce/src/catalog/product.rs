//! Product record types.

use crate::ids::{ProductId, SellerId};
use crate::money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product in the catalog.
///
/// Prices are decimal amounts tagged with a currency code. When
/// `original_price` is present it is the pre-discount price and is never
/// below `price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current price.
    pub price: f64,
    /// Pre-discount price, for discount display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Currency code the prices are tagged with.
    pub currency: String,
    /// Image references.
    pub images: Vec<String>,
    /// Category name.
    pub category: String,
    /// Subcategory name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Brand name.
    pub brand: String,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Whether the product is purchasable.
    pub in_stock: bool,
    /// Units on hand.
    pub stock_count: u32,
    /// Seller descriptor.
    pub seller: Seller,
    /// Specification table for the detail page.
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    /// Tags for filtering and search.
    pub tags: Vec<String>,
    /// Discount badge percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Whether the product is part of the flash sale.
    #[serde(default)]
    pub is_flash_sale: bool,
    /// Unix timestamp the flash sale ends at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_sale_end_time: Option<i64>,
    /// Shipping descriptor.
    pub shipping_info: ShippingInfo,
    /// Variant axes, when the product has them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Variants>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a minimal product. Seed data and tests fill in the rest.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        let now = current_timestamp();
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            currency: "USD".to_string(),
            images: Vec::new(),
            category: String::new(),
            subcategory: None,
            brand: String::new(),
            rating: 0.0,
            reviews: 0,
            in_stock: true,
            stock_count: 0,
            seller: Seller::default(),
            specifications: BTreeMap::new(),
            tags: Vec::new(),
            discount: None,
            is_flash_sale: false,
            flash_sale_end_time: None,
            shipping_info: ShippingInfo::default(),
            variants: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this product is on sale (has a positive discount badge).
    pub fn is_on_sale(&self) -> bool {
        self.discount.is_some_and(|d| d > 0)
    }

    /// Discount percentage computed from the price pair.
    ///
    /// Round half-up to the nearest integer percent; 0 when there is no
    /// original price or no positive discount.
    pub fn discount_percent(&self) -> u32 {
        self.original_price
            .map_or(0, |original| money::discount_percent(original, self.price))
    }

    /// Case-insensitive substring match against name, description, any
    /// tag, or brand. The query must already be lowercased.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query_lower))
            || self.brand.to_lowercase().contains(query_lower)
    }
}

/// Seller descriptor shown on product and detail pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub rating: f64,
    pub response_time: String,
    pub location: String,
    pub verified: bool,
}

/// Shipping descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub free_shipping: bool,
    pub estimated_days: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Variant axes offered for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Variants {
    #[serde(default)]
    pub color: Vec<String>,
    #[serde(default)]
    pub size: Vec<String>,
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_sale_requires_positive_discount() {
        let mut product = Product::new(ProductId::new(1), "Widget", 100.0);
        assert!(!product.is_on_sale());

        product.discount = Some(0);
        assert!(!product.is_on_sale());

        product.discount = Some(8);
        assert!(product.is_on_sale());
    }

    #[test]
    fn test_discount_percent_from_prices() {
        let mut product = Product::new(ProductId::new(1), "Phone", 1199.0);
        assert_eq!(product.discount_percent(), 0);

        product.original_price = Some(1299.0);
        assert_eq!(product.discount_percent(), 8);
    }

    #[test]
    fn test_query_match_fields() {
        let mut product = Product::new(ProductId::new(1), "iPhone 15 Pro Max", 1199.0);
        product.description = "Titanium design and A17 Pro chip.".to_string();
        product.brand = "Apple".to_string();
        product.tags = vec!["smartphone".to_string(), "ios".to_string()];

        assert!(product.matches_query("iphone"));
        assert!(product.matches_query("titanium"));
        assert!(product.matches_query("apple"));
        assert!(product.matches_query("ios"));
        assert!(!product.matches_query("android"));
    }
}
