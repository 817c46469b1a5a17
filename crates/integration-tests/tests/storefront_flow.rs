//! End-to-end shopping flow through `AppState`.

use std::sync::Arc;

use trueshade_core::{ColorFamily, CurrencyCode, FilterMode, Price, ProductId};
use trueshade_storefront::AppState;
use trueshade_storefront::filters::ProductFilter;
use trueshade_storefront::persistence::MemoryStore;

fn state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()), CurrencyCode::USD)
}

fn id(s: &str) -> ProductId {
    ProductId::new(s)
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_demo_catalog_is_seeded() {
    let state = state();
    let ids: Vec<&str> = state
        .catalog()
        .catalog()
        .products()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5", "p6"]);
}

#[test]
fn test_empty_filter_returns_full_catalog() {
    let state = state();
    assert_eq!(state.filtered_products(&ProductFilter::new()).len(), 6);
}

#[test]
fn test_cool_filter_returns_only_cool_products() {
    let state = state();
    let cool = state.filtered_products(&ProductFilter::new().family(ColorFamily::Cool));
    assert!(!cool.is_empty());
    assert!(cool.iter().all(|p| p.color_family == ColorFamily::Cool));
}

// =============================================================================
// Cart & Wishlist
// =============================================================================

#[test]
fn test_add_twice_then_wishlist() {
    let mut state = state();
    state.add_to_cart(&id("p1"));
    state.add_to_cart(&id("p1"));

    let cart = state.catalog().cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(state.catalog().quantity(&id("p1")), 2);
    assert_eq!(
        state.catalog().subtotal(),
        Price::whole(159, CurrencyCode::USD).times(2)
    );
    assert_eq!(state.catalog().subtotal().to_string(), "$318.00");

    state.catalog_mut().toggle_wishlist(&id("p2"), true);
    assert_eq!(state.catalog().wishlist(), [id("p2")]);
}

#[test]
fn test_change_quantity_on_empty_cart_is_noop() {
    let mut state = state();
    state.catalog_mut().change_quantity(&id("p1"), 1);
    state.catalog_mut().change_quantity(&id("p1"), -1);
    assert!(state.catalog().cart().is_empty());
}

#[test]
fn test_add_then_remove_nets_absent() {
    let mut state = state();
    state.add_to_cart(&id("p3"));
    state.catalog_mut().remove_from_cart(&id("p3"));
    assert_eq!(state.catalog().quantity(&id("p3")), 0);
    assert_eq!(state.catalog().subtotal(), Price::zero(CurrencyCode::USD));
}

#[test]
fn test_decrement_to_zero_removes_line() {
    let mut state = state();
    state.add_to_cart(&id("p6"));
    state.catalog_mut().change_quantity(&id("p6"), -1);
    assert!(state.catalog().cart().is_empty());
}

#[test]
fn test_double_toggle_restores_membership() {
    let mut state = state();
    state.catalog_mut().toggle_wishlist(&id("p5"), true);
    state.catalog_mut().toggle_wishlist(&id("p5"), true);
    assert!(!state.catalog().in_wishlist(&id("p5")));
}

#[test]
fn test_move_wishlist_item_to_cart() {
    let mut state = state();
    state.catalog_mut().toggle_wishlist(&id("p4"), true);
    assert!(state.move_to_cart(&id("p4")));
    assert!(state.catalog().wishlist().is_empty());
    assert_eq!(state.catalog().item_count(), 1);
}

#[test]
fn test_unknown_product_changes_nothing() {
    let mut state = state();
    assert!(!state.add_to_cart(&id("nope")));
    state.catalog_mut().toggle_wishlist(&id("nope"), true);
    assert!(state.catalog().cart().is_empty());
    assert!(state.catalog().wishlist().is_empty());
}

// =============================================================================
// Recommendations
// =============================================================================

#[test]
fn test_recommendations_follow_last_added_product() {
    let mut state = state();
    let initial: Vec<ProductId> = state.recommendations().iter().map(|p| p.id.clone()).collect();
    assert_eq!(initial, [id("p4"), id("p5"), id("p2")]);

    state.add_to_cart(&id("p6"));
    let recs = state.recommendations();
    assert!(recs.len() <= 3);
    assert!(recs.iter().all(|p| p.id != id("p6")));
    // p3 shares p6's neutral family.
    assert_eq!(recs.first().map(|p| p.id.as_str()), Some("p3"));
}

// =============================================================================
// Preferences & checkout
// =============================================================================

#[test]
fn test_preferences_drive_theme() {
    let mut state = state();
    state.preferences_mut().set_high_contrast(true);
    state.preferences_mut().set_filter(FilterMode::Protanopia);

    let theme = state.preferences().theme();
    assert_eq!(theme.accent.as_str(), "#6aff00");
    assert_eq!(theme.filter, FilterMode::Protanopia);
}

#[test]
fn test_checkout_is_a_notice() {
    let mut state = state();
    state.add_to_cart(&id("p2"));
    assert_eq!(
        state.checkout().to_string(),
        "Demo checkout. Accessibility-friendly flow coming soon."
    );
    // Checkout does not clear the cart.
    assert_eq!(state.catalog().item_count(), 1);
}
