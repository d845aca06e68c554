//! Denormalized cart and wishlist entries.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A cart line item.
///
/// Carries a snapshot of the product's display fields taken when it was
/// added; the product id is a foreign key into the catalog, not an owned
/// reference. At most one line exists per product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Always >= 1; reaching 0 removes the line instead.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product for the cart, quantity 1.
    pub fn snapshot_of(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.images.first().cloned().unwrap_or_default(),
            category: Some(product.category.clone()),
            quantity: 1,
        }
    }

    /// Line subtotal.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A wishlist entry: set semantics, no quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
    /// Seller name, shown on the wishlist page.
    pub seller: String,
}

impl WishlistEntry {
    /// Snapshot a product for the wishlist.
    pub fn snapshot_of(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.images.first().cloned().unwrap_or_default(),
            rating: product.rating,
            reviews: product.reviews,
            seller: product.seller.name.clone(),
        }
    }

    /// Snapshot handed to the cart by the move-to-cart flow. The wishlist
    /// never recorded a category, so the line goes without one.
    pub fn to_cart_line(&self) -> CartLine {
        CartLine {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            original_price: self.original_price,
            image: self.image.clone(),
            category: None,
            quantity: 1,
        }
    }
}
