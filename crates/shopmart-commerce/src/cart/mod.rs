//! Cart and wishlist module.
//!
//! Line items own a *copy* of the product's display fields, frozen at the
//! time they were added; later catalog changes never retroactively change
//! what the cart shows.

mod line_item;
mod store;

pub use line_item::{CartLine, WishlistEntry};
pub use store::{CartStore, CART_KEY, WISHLIST_KEY};
