//! Product catalog module.
//!
//! Records are seeded once from mock data at startup and immutable for
//! the session; there is no backend to refresh them from.

mod product;
mod seed;
mod store;

pub(crate) use product::current_timestamp;
pub use product::{Product, Seller, ShippingInfo, Variants};
pub use seed::seed_products;
pub use store::Catalog;
