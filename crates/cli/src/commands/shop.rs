//! Catalog, cart, wishlist, and checkout commands.

use rust_decimal::Decimal;
use trueshade_core::{ColorFamily, ProductId};
use trueshade_storefront::catalog::{CartLineView, Product};
use trueshade_storefront::filters::ProductFilter;
use trueshade_storefront::recommend::recommend_from;
use trueshade_storefront::{AppState, Notice};

/// One catalog row: id, name, price, color label, family, and tags.
fn product_row(product: &Product) -> String {
    let tags = if product.tags.is_empty() {
        String::new()
    } else {
        format!("  #{}", product.tags.join(" #"))
    };
    format!(
        "{:<4} {:<20} {:>9}  {} ({}){tags}",
        product.id.as_str(),
        product.name,
        product.price.to_string(),
        product.color,
        product.color_family,
    )
}

fn cart_row(line: &CartLineView<'_>) -> String {
    format!(
        "{:<4} {:<20} x{:<3} {:>9}",
        line.product.id.as_str(),
        line.product.name,
        line.quantity,
        line.line_total.to_string(),
    )
}

/// Unknown ids are a no-op, reported with a notice.
fn not_found() -> Notice {
    Notice::new("Product not found.")
}

pub fn list_catalog(
    state: &AppState,
    query: String,
    max_price: Option<Decimal>,
    families: Vec<ColorFamily>,
    tags: Vec<String>,
) {
    let filter = ProductFilter {
        query,
        max_price,
        families,
        tags,
    };
    let products = state.filtered_products(&filter);
    if products.is_empty() {
        println!("No products match these filters.");
        return;
    }
    for product in products {
        println!("{}", product_row(product));
    }
}

pub fn add_to_cart(state: &mut AppState, id: &str) {
    let id = ProductId::new(id);
    if !state.add_to_cart(&id) {
        println!("{}", not_found());
        return;
    }
    println!("Added {id}. Cart has {} item(s).", state.catalog().item_count());
    print_recommendations(state);
}

pub fn change_quantity(state: &mut AppState, id: &str, delta: i32) {
    state.catalog_mut().change_quantity(&ProductId::new(id), delta);
    show_cart(state);
}

pub fn remove_from_cart(state: &mut AppState, id: &str) {
    state.catalog_mut().remove_from_cart(&ProductId::new(id));
    show_cart(state);
}

pub fn show_cart(state: &AppState) {
    let lines = state.catalog().cart_lines();
    if lines.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for line in &lines {
        println!("{}", cart_row(line));
    }
    println!("Subtotal: {}", state.catalog().subtotal());
}

pub fn toggle_wishlist(state: &mut AppState, id: &str, toggle: bool) {
    let id = ProductId::new(id);
    if toggle && !state.catalog().catalog().contains(&id) {
        println!("{}", not_found());
        return;
    }
    state.catalog_mut().toggle_wishlist(&id, toggle);
    if state.catalog().in_wishlist(&id) {
        println!("Saved {id} to your wishlist.");
    } else {
        println!("Removed {id} from your wishlist.");
    }
}

pub fn move_to_cart(state: &mut AppState, id: &str) {
    let id = ProductId::new(id);
    if !state.move_to_cart(&id) {
        println!("{}", not_found());
        return;
    }
    println!("Moved {id} to your cart.");
    print_recommendations(state);
}

pub fn show_wishlist(state: &AppState) {
    let products = state.catalog().wishlist_products();
    if products.is_empty() {
        println!("Your wishlist is empty.");
        return;
    }
    for product in products {
        println!("{}", product_row(product));
    }
}

/// An unknown id has no recommendations.
pub fn recommend(state: &AppState, id: &str) {
    let id = ProductId::new(id);
    let products = recommend_from(state.catalog().catalog().products(), &id);
    if products.is_empty() {
        println!("No recommendations for {id}.");
        return;
    }
    for product in products {
        println!("{}", product_row(product));
    }
}

pub fn checkout(state: &AppState) {
    println!("{}", state.checkout());
}

fn print_recommendations(state: &AppState) {
    let recs = state.recommendations();
    if recs.is_empty() {
        return;
    }
    println!("You might also like:");
    for product in recs {
        println!("  {}", product_row(product));
    }
}
