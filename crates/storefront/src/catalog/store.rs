//! Cart and wishlist state with write-through persistence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use trueshade_core::{Price, ProductId};

use super::{Catalog, Product};
use crate::persistence::{self, KeyValueStore, keys};

/// One cart entry. Quantity is always at least 1 while the line exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub qty: u32,
}

/// A cart line resolved against the catalog, for display.
#[derive(Debug, Clone, Copy)]
pub struct CartLineView<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub line_total: Price,
}

/// Owns the catalog plus the mutable cart and wishlist.
///
/// Every mutation is persisted immediately through the injected
/// [`KeyValueStore`]. Unknown product ids never mutate state.
pub struct CatalogStore {
    catalog: Catalog,
    cart: Vec<CartLine>,
    wishlist: Vec<ProductId>,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("products", &self.catalog.len())
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .finish_non_exhaustive()
    }
}

impl CatalogStore {
    /// Create a store, loading any persisted cart and wishlist.
    #[must_use]
    pub fn new(catalog: Catalog, store: Arc<dyn KeyValueStore>) -> Self {
        let mut this = Self {
            catalog,
            cart: Vec::new(),
            wishlist: Vec::new(),
            store,
        };
        this.reload();
        this
    }

    /// Re-read cart and wishlist from persistence.
    ///
    /// Loaded data is normalized: zero-quantity lines and repeated ids are
    /// dropped, keeping the first occurrence.
    pub fn reload(&mut self) {
        self.store.refresh();
        let cart: Vec<CartLine> = persistence::load(self.store.as_ref(), keys::CART, Vec::new());
        let wishlist: Vec<ProductId> =
            persistence::load(self.store.as_ref(), keys::WISHLIST, Vec::new());

        self.cart.clear();
        for line in cart {
            if line.qty > 0 && !self.cart.iter().any(|l| l.id == line.id) {
                self.cart.push(line);
            }
        }

        self.wishlist.clear();
        for id in wishlist {
            if !self.wishlist.contains(&id) {
                self.wishlist.push(id);
            }
        }

        debug!(
            cart_lines = self.cart.len(),
            wishlist = self.wishlist.len(),
            "Loaded shopper state"
        );
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Raw cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Wishlisted ids in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[ProductId] {
        &self.wishlist
    }

    /// Quantity of `id` in the cart, or 0 if absent.
    #[must_use]
    pub fn quantity(&self, id: &ProductId) -> u32 {
        self.cart
            .iter()
            .find(|line| &line.id == id)
            .map_or(0, |line| line.qty)
    }

    #[must_use]
    pub fn in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.contains(id)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of `id`, creating the line if needed.
    ///
    /// Returns `false` (and changes nothing) if the product is unknown.
    #[instrument(skip(self, id), fields(product = %id))]
    pub fn add_to_cart(&mut self, id: &ProductId) -> bool {
        if !self.catalog.contains(id) {
            debug!("Ignoring unknown product");
            return false;
        }

        match self.cart.iter_mut().find(|line| &line.id == id) {
            Some(line) => line.qty = line.qty.saturating_add(1),
            None => self.cart.push(CartLine {
                id: id.clone(),
                qty: 1,
            }),
        }
        self.persist_cart();
        true
    }

    /// Adjust the quantity of an existing line by `delta`.
    ///
    /// The line is removed once its quantity reaches 0 or below. Absent ids
    /// are a no-op.
    #[instrument(skip(self, id), fields(product = %id))]
    pub fn change_quantity(&mut self, id: &ProductId, delta: i32) {
        let Some(index) = self.cart.iter().position(|line| &line.id == id) else {
            return;
        };

        let current = self.cart.get(index).map_or(0, |line| i64::from(line.qty));
        let next = current + i64::from(delta);
        if next <= 0 {
            self.cart.remove(index);
        } else if let Some(line) = self.cart.get_mut(index) {
            line.qty = u32::try_from(next).unwrap_or(u32::MAX);
        }
        self.persist_cart();
    }

    /// Delete the line for `id`, whatever its quantity.
    #[instrument(skip(self, id), fields(product = %id))]
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.retain(|line| &line.id != id);
        self.persist_cart();
    }

    /// Cart lines resolved against the catalog. Lines for products missing
    /// from the catalog are skipped.
    #[must_use]
    pub fn cart_lines(&self) -> Vec<CartLineView<'_>> {
        self.cart
            .iter()
            .filter_map(|line| {
                let product = self.catalog.get(&line.id)?;
                Some(CartLineView {
                    product,
                    quantity: line.qty,
                    line_total: product.price.times(line.qty),
                })
            })
            .collect()
    }

    /// Sum of `price x quantity` over all resolvable lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.cart_lines().iter().fold(
            Price::zero(self.catalog.currency()),
            |acc, line| acc + line.line_total,
        )
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart
            .iter()
            .fold(0, |acc: u32, line| acc.saturating_add(line.qty))
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Toggle or remove a wishlist entry.
    ///
    /// With `toggle == true` membership flips. With `toggle == false` the id
    /// is removed unconditionally. Unknown products are never added.
    #[instrument(skip(self, id), fields(product = %id))]
    pub fn toggle_wishlist(&mut self, id: &ProductId, toggle: bool) {
        let present = self.wishlist.contains(id);
        if toggle && !present {
            if !self.catalog.contains(id) {
                debug!("Ignoring unknown product");
                return;
            }
            self.wishlist.push(id.clone());
        } else {
            self.wishlist.retain(|w| w != id);
        }
        self.persist_wishlist();
    }

    /// Move a wishlisted product into the cart.
    ///
    /// Returns `false` if the product is unknown.
    pub fn move_to_cart(&mut self, id: &ProductId) -> bool {
        if !self.add_to_cart(id) {
            return false;
        }
        self.toggle_wishlist(id, false);
        true
    }

    /// Wishlisted products that exist in the catalog, in insertion order.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.wishlist
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_cart(&self) {
        if let Err(e) = persistence::save(self.store.as_ref(), keys::CART, &self.cart) {
            warn!(error = %e, "Failed to persist cart");
        }
    }

    fn persist_wishlist(&self) {
        if let Err(e) = persistence::save(self.store.as_ref(), keys::WISHLIST, &self.wishlist) {
            warn!(error = %e, "Failed to persist wishlist");
        }
    }
}
