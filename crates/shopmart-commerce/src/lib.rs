//! Storefront client-state layer for ShopMart.
//!
//! Everything the UI renders from lives here:
//!
//! - **Catalog**: seeded, immutable product records with search/filter/sort
//! - **Cart**: cart and wishlist stores with denormalized line items and
//!   write-through persistence
//! - **Browse**: session-only filter and sort state over the catalog
//! - **Money**: currency conversion and price formatting
//! - **Search**: persisted search history and typeahead suggestions
//! - **Session**: persisted language/currency/location/theme preferences
//! - **Account**: mock login/registration and order history
//!
//! There is no server: the catalog is mock data seeded at startup, and
//! persistence is a client-local key-value store. Stores are constructed
//! explicitly and injected into the UI layer; each instance is owned by
//! exactly one logical session and accessed single-threaded.
//!
//! # Example
//!
//! ```rust
//! use shopmart_commerce::prelude::*;
//! use shopmart_storage::LocalStore;
//!
//! let storage = LocalStore::new();
//! let catalog = Catalog::with_seed_data();
//! let mut cart = CartStore::new(storage.clone());
//!
//! let product = catalog.get(ProductId::new(1)).unwrap();
//! cart.add(CartLine::snapshot_of(product));
//! assert_eq!(cart.count(), 1);
//! ```

pub mod ids;
pub mod money;

pub mod account;
pub mod browse;
pub mod cart;
pub mod catalog;
pub mod search;
pub mod session;

pub use ids::*;
pub use money::Currency;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::money::{convert, discount_percent, format_price, Currency};

    // Catalog
    pub use crate::catalog::{Catalog, Product, Seller, ShippingInfo, Variants};

    // Cart
    pub use crate::cart::{CartLine, CartStore, WishlistEntry};

    // Browse
    pub use crate::browse::{FilterState, Listing, SortDirection, SortField, SortState};

    // Search
    pub use crate::search::SearchHistory;

    // Session
    pub use crate::session::{Preferences, Theme};

    // Account
    pub use crate::account::{AccountError, AccountSession, Order, RegistrationForm, User};
}
