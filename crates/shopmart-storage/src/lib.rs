//! Client-local key-value storage layer for ShopMart.
//!
//! Provides a simple, ergonomic API for persisting session state under
//! string keys with automatic JSON serialization, the way a browser's
//! `localStorage` is used by the storefront UI.
//!
//! # Example
//!
//! ```rust
//! use shopmart_storage::LocalStore;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug, Default)]
//! struct History(Vec<String>);
//!
//! let store = LocalStore::new();
//! store.set("searchHistory", &History(vec!["iphone".into()])).unwrap();
//!
//! let history: Option<History> = store.get("searchHistory").unwrap();
//! assert!(history.is_some());
//!
//! store.remove("searchHistory");
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::LocalStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{LocalStore, StorageError};
}
