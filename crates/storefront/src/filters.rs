//! Catalog filtering: search text, price ceiling, color families, and tags.

use rust_decimal::Decimal;
use trueshade_core::ColorFamily;

use crate::catalog::Product;

/// Active catalog filters. The default matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Free-text query, matched case-insensitively against name, color label,
    /// and description.
    pub query: String,
    /// Inclusive price ceiling; `None` means no ceiling.
    pub max_price: Option<Decimal>,
    /// Accepted families; empty accepts all.
    pub families: Vec<ColorFamily>,
    /// Required tags; a product must carry every one of them.
    pub tags: Vec<String>,
}

impl ProductFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub const fn max_price(mut self, ceiling: Decimal) -> Self {
        self.max_price = Some(ceiling);
        self
    }

    #[must_use]
    pub fn family(mut self, family: ColorFamily) -> Self {
        if !self.families.contains(&family) {
            self.families.push(family);
        }
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.max_price.is_none()
            && self.families.is_empty()
            && self.tags.is_empty()
    }

    /// Whether `product` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.query.trim().to_lowercase();
        self.matches_with_needle(product, &needle)
    }

    fn matches_with_needle(&self, product: &Product, needle: &str) -> bool {
        let matches_query = needle.is_empty() || product.search_text().contains(needle);
        let matches_price = self
            .max_price
            .is_none_or(|ceiling| product.price.at_most(ceiling));
        let matches_family =
            self.families.is_empty() || self.families.contains(&product.color_family);
        let matches_tags = self.tags.iter().all(|tag| product.has_tag(tag));

        matches_query && matches_price && matches_family && matches_tags
    }
}

/// Products matching `filter`, in catalog order.
#[must_use]
pub fn apply_filters<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    let needle = filter.query.trim().to_lowercase();
    products
        .iter()
        .filter(|product| filter.matches_with_needle(product, &needle))
        .collect()
}
