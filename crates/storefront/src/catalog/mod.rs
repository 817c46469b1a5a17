//! Product catalog and shopper state.
//!
//! Products are seeded once at startup and never change afterwards. Cart and
//! wishlist state lives in [`CatalogStore`].

mod store;

use serde::Serialize;
use trueshade_core::{ColorFamily, CurrencyCode, HexColor, Price, ProductId, Rgb};

pub use store::{CartLine, CartLineView, CatalogStore};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Human-readable color label, e.g. "Sky Blue – Calm Tone".
    pub color: String,
    pub color_family: ColorFamily,
    /// Unique tags, in display order.
    pub tags: Vec<String>,
    pub base_color: HexColor,
    pub description: String,
}

impl Product {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of tags this product shares with `other`.
    #[must_use]
    pub fn shared_tags(&self, other: &Self) -> usize {
        self.tags.iter().filter(|t| other.has_tag(t)).count()
    }

    /// Lowercased text the search box matches against.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.color, self.description).to_lowercase()
    }
}

/// The immutable, ordered product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    currency: CurrencyCode,
}

impl Catalog {
    /// Build a catalog, dropping any product whose id repeats an earlier one.
    #[must_use]
    pub fn new(products: Vec<Product>, currency: CurrencyCode) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                tracing::warn!(product = %product.id, "Skipping duplicate product id");
                continue;
            }
            unique.push(product);
        }
        Self {
            products: unique,
            currency,
        }
    }

    /// The six demo products shown by the storefront.
    #[must_use]
    pub fn demo(currency: CurrencyCode) -> Self {
        Self::new(seed_products(currency), currency)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    price: u32,
    color: &'static str,
    family: ColorFamily,
    tags: &'static [&'static str],
    base: [u8; 3],
    description: &'static str,
}

const DEMO_PRODUCTS: [Seed; 6] = [
    Seed {
        id: "p1",
        name: "Aurora Jacket",
        price: 159,
        color: "Sky Blue – Calm Tone",
        family: ColorFamily::Cool,
        tags: &["new"],
        base: [0x6a, 0xe3, 0xff],
        description: "Lightweight jacket with breathable mesh.",
    },
    Seed {
        id: "p2",
        name: "Solar Sneakers",
        price: 129,
        color: "Sunset Orange – Warm Tone",
        family: ColorFamily::Warm,
        tags: &["bestseller"],
        base: [0xff, 0x7a, 0x4a],
        description: "Cushioned comfort with dynamic grip.",
    },
    Seed {
        id: "p3",
        name: "Monolith Backpack",
        price: 98,
        color: "Graphite – Neutral Tone",
        family: ColorFamily::Neutral,
        tags: &["eco"],
        base: [0x2f, 0x36, 0x45],
        description: "Recycled materials, spacious compartments.",
    },
    Seed {
        id: "p4",
        name: "Tide Tee",
        price: 32,
        color: "Ocean Teal – Calm Tone",
        family: ColorFamily::Cool,
        tags: &["eco", "new"],
        base: [0x1e, 0xb5, 0xa1],
        description: "Ultra-soft cotton with cooling knit.",
    },
    Seed {
        id: "p5",
        name: "Blossom Hoodie",
        price: 86,
        color: "Rose Pink – Gentle Tone",
        family: ColorFamily::Warm,
        tags: &["new"],
        base: [0xff, 0x7a, 0xdf],
        description: "Cozy fleece with oversized hood.",
    },
    Seed {
        id: "p6",
        name: "Nimbus Bottle",
        price: 24,
        color: "Frost White – Clear Tone",
        family: ColorFamily::Neutral,
        tags: &["bestseller"],
        base: [0xe6, 0xeb, 0xff],
        description: "Double-wall vacuum insulated.",
    },
];

/// Demo products, priced in `currency`.
#[must_use]
pub fn seed_products(currency: CurrencyCode) -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_owned(),
            price: Price::whole(seed.price, currency),
            color: seed.color.to_owned(),
            color_family: seed.family,
            tags: seed.tags.iter().map(|t| (*t).to_owned()).collect(),
            base_color: HexColor::from(Rgb::from(seed.base)),
            description: seed.description.to_owned(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_order() {
        let catalog = Catalog::demo(CurrencyCode::USD);
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5", "p6"]);
    }

    #[test]
    fn test_demo_product_fields() {
        let catalog = Catalog::demo(CurrencyCode::USD);
        let tee = catalog.get(&ProductId::new("p4"));
        assert!(tee.is_some_and(|p| p.has_tag("eco") && p.has_tag("new")));
        assert!(tee.is_some_and(|p| p.base_color.as_str() == "#1eb5a1"));
        assert!(tee.is_some_and(|p| p.price.to_string() == "$32.00"));
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut products = seed_products(CurrencyCode::USD);
        let mut copy = products[0].clone();
        copy.name = "Impostor".to_string();
        products.push(copy);

        let catalog = Catalog::new(products, CurrencyCode::USD);
        assert_eq!(catalog.len(), 6);
        assert!(
            catalog
                .get(&ProductId::new("p1"))
                .is_some_and(|p| p.name == "Aurora Jacket")
        );
    }

    #[test]
    fn test_shared_tags() {
        let catalog = Catalog::demo(CurrencyCode::USD);
        let jacket = &catalog.products()[0];
        let tee = &catalog.products()[3];
        assert_eq!(jacket.shared_tags(tee), 1);
        assert_eq!(tee.shared_tags(jacket), 1);
    }

    #[test]
    fn test_search_text_is_lowercase() {
        let catalog = Catalog::demo(CurrencyCode::USD);
        let text = catalog.products()[2].search_text();
        assert!(text.contains("monolith backpack"));
        assert!(text.contains("graphite"));
        assert!(text.contains("recycled"));
    }
}
