//! Two-tier matching over a catalog snapshot.
//!
//! The visible tier (what the shopper can currently see) is scored first.
//! Only when it yields fewer positives than the policy threshold does the
//! full catalog get scored as well, so on-screen products always take
//! precedence. Sorting is stable, which keeps visible-tier products ahead
//! of equal-scored full-tier ones.

use std::collections::HashSet;

use tracing::debug;

use crate::model::{CatalogSnapshot, MatchPolicy, MatchQuery, MatchedProduct, Product};
use crate::scoring::score_product;

struct Candidate<'a> {
    product: &'a Product,
    score: u32,
}

fn collect_candidates<'a>(
    products: &'a [Product],
    query: &MatchQuery,
    character_query: bool,
) -> Vec<Candidate<'a>> {
    products
        .iter()
        .filter_map(|product| {
            let score = score_product(
                product,
                query.color.as_deref(),
                query.category.as_deref(),
                &query.keywords,
                character_query,
            );
            (score > 0).then(|| Candidate { product, score })
        })
        .collect()
}

/// Run the full match pipeline: tiered scoring, ranking, sanitization,
/// image dedupe, and the result cap.
pub fn match_catalog(
    snapshot: &CatalogSnapshot,
    query: &MatchQuery,
    policy: &MatchPolicy,
) -> Vec<MatchedProduct> {
    let character_query = query.is_character_query();

    let mut candidates = collect_candidates(&snapshot.visible, query, character_query);
    let visible_hits = candidates.len();
    if candidates.len() < policy.min_results {
        candidates.extend(collect_candidates(&snapshot.full, query, character_query));
    }
    debug!(
        visible_hits,
        total_hits = candidates.len(),
        character_query,
        "match_catalog: candidates collected"
    );

    // Stable sort: equal scores keep collection order, visible tier first.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let mut seen_images: HashSet<&str> = HashSet::new();
    let mut results = Vec::new();
    for candidate in &candidates {
        let product = candidate.product;
        if product.title.is_empty() {
            continue;
        }
        let Some(image) = product.image.as_deref() else {
            continue;
        };
        if !seen_images.insert(image) {
            continue;
        }
        results.push(MatchedProduct {
            title: product.title.clone(),
            color: product.color.clone(),
            image: image.to_string(),
            link: product.link.clone(),
        });
        if results.len() >= policy.result_cap {
            break;
        }
    }

    debug!(returned = results.len(), "match_catalog: done");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(title: &str, color: &str, image: &str) -> Product {
        Product {
            title: title.to_string(),
            color: color.to_string(),
            image: (!image.is_empty()).then(|| image.to_string()),
            link: "#".to_string(),
        }
    }

    fn snapshot(visible: Vec<Product>, full: Vec<Product>) -> CatalogSnapshot {
        CatalogSnapshot {
            visible,
            full,
            uploaded_at: Utc::now(),
        }
    }

    fn query_color(color: &str) -> MatchQuery {
        MatchQuery {
            message: "something nice".to_string(),
            color: Some(color.to_string()),
            category: None,
            keywords: Vec::new(),
        }
    }

    #[test]
    fn full_tier_not_consulted_when_visible_suffices() {
        let visible = (0..6)
            .map(|i| product(&format!("Pink Dress {i}"), "pink", &format!("https://c.ai/v{i}.jpg")))
            .collect();
        let full = vec![product("Hidden Pink Gown", "pink", "https://c.ai/full.jpg")];
        let results = match_catalog(
            &snapshot(visible, full),
            &query_color("pink"),
            &MatchPolicy::default(),
        );
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|r| r.title != "Hidden Pink Gown"));
    }

    #[test]
    fn full_tier_extends_sparse_visible_results() {
        let visible = vec![product("Pink Tee", "pink", "https://c.ai/v0.jpg")];
        let full = vec![
            product("Pink Gown", "pink", "https://c.ai/f0.jpg"),
            product("Blue Jeans", "blue", "https://c.ai/f1.jpg"),
        ];
        let results = match_catalog(
            &snapshot(visible, full),
            &query_color("pink"),
            &MatchPolicy::default(),
        );
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pink Tee", "Pink Gown"]);
    }

    #[test]
    fn higher_scores_first_and_visible_wins_ties() {
        let visible = vec![product("Pink Tee", "pink", "https://c.ai/v0.jpg")];
        let full = vec![
            // Same score as the visible tee, so the tee must stay ahead.
            product("Pink Cap", "pink", "https://c.ai/f0.jpg"),
            // Color plus keyword outranks color alone.
            product("Pink Satin Dress", "pink", "https://c.ai/f1.jpg"),
        ];
        let query = MatchQuery {
            message: "something satin".to_string(),
            color: Some("pink".to_string()),
            category: None,
            keywords: vec!["satin".to_string()],
        };
        let results = match_catalog(&snapshot(visible, full), &query, &MatchPolicy::default());
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pink Satin Dress", "Pink Tee", "Pink Cap"]);
    }

    #[test]
    fn duplicate_images_keep_the_better_ranked_product() {
        let shared = "https://c.ai/same.jpg";
        let visible = vec![
            product("Pink Satin Dress", "pink", shared),
            product("Pink Tee", "pink", shared),
            product("Pink Cap", "pink", "https://c.ai/cap.jpg"),
        ];
        let results = match_catalog(
            &snapshot(visible, Vec::new()),
            &query_color("pink"),
            &MatchPolicy::default(),
        );
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pink Satin Dress", "Pink Cap"]);
    }

    #[test]
    fn results_stop_at_the_cap() {
        let visible = (0..30)
            .map(|i| product(&format!("Pink Item {i}"), "pink", &format!("https://c.ai/{i}.jpg")))
            .collect();
        let results = match_catalog(
            &snapshot(visible, Vec::new()),
            &query_color("pink"),
            &MatchPolicy::default(),
        );
        assert_eq!(results.len(), 24);
    }

    #[test]
    fn products_without_title_or_image_are_dropped() {
        let visible = vec![
            product("", "pink", "https://c.ai/untitled.jpg"),
            product("Pink Dress", "pink", ""),
            product("Pink Tee", "pink", "https://c.ai/tee.jpg"),
        ];
        let results = match_catalog(
            &snapshot(visible, Vec::new()),
            &query_color("pink"),
            &MatchPolicy::default(),
        );
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pink Tee"]);
    }

    #[test]
    fn empty_catalog_yields_no_results() {
        let results = match_catalog(
            &CatalogSnapshot::empty(),
            &query_color("pink"),
            &MatchPolicy::default(),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn zero_score_products_never_appear() {
        let visible = vec![
            product("Blue Jeans", "blue", "https://c.ai/jeans.jpg"),
            product("Pink Dress", "pink", "https://c.ai/dress.jpg"),
        ];
        let results = match_catalog(
            &snapshot(visible, Vec::new()),
            &query_color("pink"),
            &MatchPolicy::default(),
        );
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pink Dress"]);
    }
}
