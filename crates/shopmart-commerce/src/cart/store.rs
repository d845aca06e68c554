//! Cart/wishlist store with write-through persistence.

use crate::cart::{CartLine, WishlistEntry};
use crate::ids::ProductId;
use shopmart_storage::LocalStore;

/// Storage key for the cart collection.
pub const CART_KEY: &str = "shopmart-cart";
/// Storage key for the wishlist collection.
pub const WISHLIST_KEY: &str = "shopmart-wishlist";

/// Holds the session's cart and wishlist.
///
/// Constructed explicitly with the session's storage handle and injected
/// into the UI layer; exactly one writer per session. Collections load
/// from storage at construction (a missing or corrupt blob degrades to
/// empty) and every mutation writes straight back. Persist failures are
/// logged and swallowed: a broken store falls back to in-memory state,
/// nothing here is fatal.
pub struct CartStore {
    storage: LocalStore,
    items: Vec<CartLine>,
    wishlist: Vec<WishlistEntry>,
}

impl CartStore {
    /// Load a cart store over the session's storage.
    pub fn new(storage: LocalStore) -> Self {
        let items = storage.load_or_default(CART_KEY);
        let wishlist = storage.load_or_default(WISHLIST_KEY);
        Self {
            storage,
            items,
            wishlist,
        }
    }

    // --- Cart ---

    /// Cart lines, oldest first.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Add a snapshot to the cart.
    ///
    /// If a line for the product already exists its quantity goes up by
    /// exactly 1 and the incoming snapshot is ignored; otherwise the
    /// snapshot is appended with quantity 1.
    pub fn add(&mut self, item: CartLine) {
        self.add_with_quantity(item, 1);
    }

    /// Add a snapshot with an explicit quantity.
    ///
    /// The quantity only applies to a *new* line. A repeat add still
    /// increments the existing line by exactly 1: both call paths exist
    /// in the UI ("add one" from listings, "add n" from the detail page)
    /// and repeat-adds behave the same from either.
    pub fn add_with_quantity(&mut self, mut item: CartLine, quantity: u32) {
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity += 1;
        } else {
            item.quantity = quantity.max(1);
            self.items.push(item);
        }
        self.persist_cart();
    }

    /// Set a line's quantity; 0 (or less, for callers computing deltas)
    /// removes the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
            self.persist_cart();
        }
    }

    /// Remove a line. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        let before = self.items.len();
        self.items.retain(|line| line.id != id);
        if self.items.len() < before {
            self.persist_cart();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist_cart();
    }

    /// Sum of price x quantity over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities, not line count: a quantity-3 line counts as 3.
    pub fn count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- Wishlist ---

    /// Wishlist entries, oldest first.
    pub fn wishlist(&self) -> &[WishlistEntry] {
        &self.wishlist
    }

    /// Add an entry to the wishlist. No-op on a duplicate id: the
    /// existing snapshot is kept, not updated.
    pub fn add_to_wishlist(&mut self, entry: WishlistEntry) {
        if self.is_in_wishlist(entry.id) {
            return;
        }
        self.wishlist.push(entry);
        self.persist_wishlist();
    }

    /// Remove an entry. No-op if absent.
    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        let before = self.wishlist.len();
        self.wishlist.retain(|entry| entry.id != id);
        if self.wishlist.len() < before {
            self.persist_wishlist();
        }
    }

    /// Empty the wishlist.
    pub fn clear_wishlist(&mut self) {
        self.wishlist.clear();
        self.persist_wishlist();
    }

    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.iter().any(|entry| entry.id == id)
    }

    /// Number of distinct wishlist entries.
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Move a wishlist entry into the cart (the wishlist page's "add to
    /// cart" flow). No-op if the id isn't wishlisted.
    pub fn move_to_cart(&mut self, id: ProductId) {
        let Some(entry) = self.wishlist.iter().find(|e| e.id == id) else {
            return;
        };
        let line = entry.to_cart_line();
        self.add(line);
        self.remove_from_wishlist(id);
    }

    fn persist_cart(&self) {
        if let Err(e) = self.storage.set(CART_KEY, &self.items) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }

    fn persist_wishlist(&self) {
        if let Err(e) = self.storage.set(WISHLIST_KEY, &self.wishlist) {
            tracing::warn!(error = %e, "failed to persist wishlist");
        }
    }
}
