//! State surviving a restart through `JsonFileStore`.

#![allow(clippy::unwrap_used)]

use trueshade_core::{FilterMode, ProductId};
use trueshade_integration_tests::TestContext;
use trueshade_storefront::persistence::keys;

#[test]
fn test_state_survives_restart() {
    let ctx = TestContext::new();
    {
        let mut state = ctx.session();
        state.add_to_cart(&ProductId::new("p1"));
        state.add_to_cart(&ProductId::new("p1"));
        state.catalog_mut().toggle_wishlist(&ProductId::new("p2"), true);
        state.preferences_mut().set_large_text(true);
        state.preferences_mut().set_filter(FilterMode::Deuteranopia);
    }

    let state = ctx.session();
    assert_eq!(state.catalog().quantity(&ProductId::new("p1")), 2);
    assert!(state.catalog().in_wishlist(&ProductId::new("p2")));
    assert!(state.preferences().preferences().large_text);
    assert_eq!(
        state.preferences().preferences().filter,
        FilterMode::Deuteranopia
    );
}

#[test]
fn test_file_uses_storage_keys() {
    let ctx = TestContext::new();
    let mut state = ctx.session();
    state.add_to_cart(&ProductId::new("p4"));
    state.preferences_mut().set_high_contrast(true);

    let raw = std::fs::read_to_string(ctx.data_file()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(doc.get(keys::CART).is_some());
    assert!(doc.get(keys::PREFERENCES).is_some());
}

#[test]
fn test_corrupt_file_starts_fresh() {
    let ctx = TestContext::new();
    std::fs::write(ctx.data_file(), "{ not json").unwrap();

    let mut state = ctx.session();
    assert!(state.catalog().cart().is_empty());
    assert!(state.catalog().wishlist().is_empty());

    // The store stays usable after discarding the corrupt file.
    state.add_to_cart(&ProductId::new("p3"));
    let reopened = ctx.session();
    assert_eq!(reopened.catalog().quantity(&ProductId::new("p3")), 1);
}

#[test]
fn test_stale_cart_lines_are_skipped() {
    let ctx = TestContext::new();
    let store = ctx.store();
    store
        .set_raw(
            keys::CART,
            r#"[{"id":"p1","qty":1},{"id":"retired","qty":4}]"#.to_string(),
        )
        .unwrap();

    let state = ctx.session();
    let lines = state.catalog().cart_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(state.catalog().subtotal().to_string(), "$159.00");
}

#[test]
fn test_reload_sees_another_session() {
    let ctx = TestContext::new();
    let mut first = ctx.session();
    let mut second = ctx.session();

    second.add_to_cart(&ProductId::new("p5"));
    assert_eq!(first.catalog().quantity(&ProductId::new("p5")), 0);

    first.reload();
    assert_eq!(first.catalog().quantity(&ProductId::new("p5")), 1);
}
