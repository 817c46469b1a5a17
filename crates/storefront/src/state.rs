//! Application state owned by a storefront frontend.

use std::sync::Arc;

use tracing::{info, instrument};
use trueshade_core::{CurrencyCode, ProductId};

use crate::catalog::{Catalog, CatalogStore, Product};
use crate::error::{Notice, add_breadcrumb};
use crate::filters::{ProductFilter, apply_filters};
use crate::persistence::KeyValueStore;
use crate::prefs::PreferencesStore;
use crate::recommend::recommend_from;

/// Product the initial recommendations are computed from.
pub const STARTUP_RECOMMENDATION_SEED: &str = "p1";

const CHECKOUT_NOTICE: &str = "Demo checkout. Accessibility-friendly flow coming soon.";

/// Catalog, cart, wishlist, preferences, and the current recommendations.
///
/// A single owner drives every mutation; nothing here is global.
#[derive(Debug)]
pub struct AppState {
    catalog: CatalogStore,
    preferences: PreferencesStore,
    recommendations: Vec<ProductId>,
}

impl AppState {
    /// Seed the demo catalog and load persisted state from `store`.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, currency: CurrencyCode) -> Self {
        Self::with_catalog(Catalog::demo(currency), store)
    }

    /// Build state around an arbitrary catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, store: Arc<dyn KeyValueStore>) -> Self {
        let catalog = CatalogStore::new(catalog, Arc::clone(&store));
        let preferences = PreferencesStore::new(store);
        let mut state = Self {
            catalog,
            preferences,
            recommendations: Vec::new(),
        };
        state.recompute_recommendations(&ProductId::new(STARTUP_RECOMMENDATION_SEED));
        info!(
            products = state.catalog.catalog().len(),
            cart_lines = state.catalog.cart().len(),
            "Storefront state loaded"
        );
        state
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub const fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    #[must_use]
    pub const fn preferences(&self) -> &PreferencesStore {
        &self.preferences
    }

    pub const fn preferences_mut(&mut self) -> &mut PreferencesStore {
        &mut self.preferences
    }

    /// Add one unit to the cart and refresh recommendations around it.
    ///
    /// Unknown ids change nothing and return `false`.
    #[instrument(skip(self, id), fields(product = %id))]
    pub fn add_to_cart(&mut self, id: &ProductId) -> bool {
        if !self.catalog.add_to_cart(id) {
            return false;
        }
        add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
        self.recompute_recommendations(id);
        true
    }

    /// Move a wishlisted product to the cart, refreshing recommendations.
    pub fn move_to_cart(&mut self, id: &ProductId) -> bool {
        if !self.catalog.move_to_cart(id) {
            return false;
        }
        self.recompute_recommendations(id);
        true
    }

    /// Current recommendations, best first.
    #[must_use]
    pub fn recommendations(&self) -> Vec<&Product> {
        self.recommendations
            .iter()
            .filter_map(|id| self.catalog.catalog().get(id))
            .collect()
    }

    /// Catalog products matching `filter`.
    #[must_use]
    pub fn filtered_products(&self, filter: &ProductFilter) -> Vec<&Product> {
        apply_filters(self.catalog.catalog().products(), filter)
    }

    /// The checkout flow is not implemented; shoppers get a notice instead.
    #[must_use]
    pub fn checkout(&self) -> Notice {
        add_breadcrumb("cart", "Checkout requested", None);
        Notice::new(CHECKOUT_NOTICE)
    }

    /// Re-read cart, wishlist, and preferences, e.g. when the surface regains
    /// focus after another session changed them.
    pub fn reload(&mut self) {
        self.catalog.reload();
        self.preferences.reload();
    }

    fn recompute_recommendations(&mut self, id: &ProductId) {
        self.recommendations = recommend_from(self.catalog.catalog().products(), id)
            .into_iter()
            .map(|p| p.id.clone())
            .collect();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use trueshade_core::{ColorFamily, FilterMode};

    use super::*;
    use crate::persistence::MemoryStore;

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), CurrencyCode::USD)
    }

    fn rec_ids(state: &AppState) -> Vec<&str> {
        state.recommendations().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_startup_recommendations_from_p1() {
        let state = state();
        assert_eq!(rec_ids(&state), ["p4", "p5", "p2"]);
    }

    #[test]
    fn test_add_to_cart_refreshes_recommendations() {
        let mut state = state();
        assert!(state.add_to_cart(&ProductId::new("p4")));
        assert_eq!(rec_ids(&state), ["p1", "p3", "p5"]);
        assert_eq!(state.catalog().quantity(&ProductId::new("p4")), 1);
    }

    #[test]
    fn test_unknown_add_keeps_recommendations() {
        let mut state = state();
        assert!(!state.add_to_cart(&ProductId::new("p99")));
        assert_eq!(rec_ids(&state), ["p4", "p5", "p2"]);
        assert!(state.catalog().cart().is_empty());
    }

    #[test]
    fn test_move_to_cart() {
        let mut state = state();
        let p2 = ProductId::new("p2");
        state.catalog_mut().toggle_wishlist(&p2, true);
        assert!(state.move_to_cart(&p2));
        assert!(!state.catalog().in_wishlist(&p2));
        assert_eq!(state.catalog().quantity(&p2), 1);
        assert_eq!(rec_ids(&state), ["p5", "p6", "p1"]);
    }

    #[test]
    fn test_filtered_products() {
        let state = state();
        let filter = ProductFilter::new().family(ColorFamily::Cool);
        let ids: Vec<&str> = state
            .filtered_products(&filter)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["p1", "p4"]);
    }

    #[test]
    fn test_checkout_notice() {
        assert_eq!(
            state().checkout().message(),
            "Demo checkout. Accessibility-friendly flow coming soon."
        );
    }

    #[test]
    fn test_reload_sees_other_session() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut first = AppState::new(Arc::clone(&store), CurrencyCode::USD);
        let mut second = AppState::new(Arc::clone(&store), CurrencyCode::USD);

        second.add_to_cart(&ProductId::new("p3"));
        second.preferences_mut().set_filter(FilterMode::Protanopia);

        assert!(first.catalog().cart().is_empty());
        first.reload();
        assert_eq!(first.catalog().quantity(&ProductId::new("p3")), 1);
        assert_eq!(first.preferences().preferences().filter, FilterMode::Protanopia);
    }
}
