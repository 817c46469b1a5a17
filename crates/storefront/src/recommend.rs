//! "You might also like" recommendations.
//!
//! Scoring is a simple similarity heuristic: two points for sharing the
//! reference product's color family plus one point per shared tag.

use trueshade_core::ProductId;

use crate::catalog::Product;

/// Maximum number of recommendations shown.
pub const MAX_RECOMMENDATIONS: usize = 3;

const SAME_FAMILY_SCORE: usize = 2;

/// Similarity of `candidate` to `reference`.
#[must_use]
pub fn score(reference: &Product, candidate: &Product) -> usize {
    let family = if candidate.color_family == reference.color_family {
        SAME_FAMILY_SCORE
    } else {
        0
    };
    family + candidate.shared_tags(reference)
}

/// Up to three products most similar to `id`, best first.
///
/// The reference product itself is never included. Equal scores keep
/// catalog order. An unknown `id` yields an empty list.
#[must_use]
pub fn recommend_from<'a>(products: &'a [Product], id: &ProductId) -> Vec<&'a Product> {
    let Some(reference) = products.iter().find(|p| &p.id == id) else {
        return Vec::new();
    };

    let mut scored: Vec<(usize, &Product)> = products
        .iter()
        .filter(|p| &p.id != id)
        .map(|p| (score(reference, p), p))
        .collect();

    // `sort_by` is stable, so ties stay in catalog order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(_, p)| p)
        .collect()
}
