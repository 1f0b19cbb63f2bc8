// Core catalog structs: RawProduct, Product, CatalogSnapshot, MatchQuery, MatchPolicy.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default minimum number of positive-scoring visible products before the
/// full tier is consulted. Observed values across feed iterations vary (6
/// and 8), so this is a tunable, not a law.
pub const DEFAULT_MIN_RESULTS: usize = 6;

/// Hard cap on the number of products one match response may carry.
pub const RESULT_CAP: usize = 24;

/// Default base prefixed to relative image URLs at ingestion.
pub const DEFAULT_ASSET_BASE: &str = "https://clotheme.ai";

/// One product as it arrives in an upload payload.
///
/// Feeds are scraped, so every field can go missing; the normalizer decides
/// what survives into the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A catalog product after ingestion-time normalization.
///
/// `color` is canonical, `image` is absolute when present, `link` already
/// carries the `"#"` fallback. The image URL doubles as the only identity
/// the catalog has; it is the de-duplication key at match time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub title: String,
    pub color: String,
    pub image: Option<String>,
    pub link: String,
}

/// Public projection of a matched product.
///
/// The internal relevance score never leaves the engine, and products
/// without a usable title or image never reach this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedProduct {
    pub title: String,
    pub color: String,
    pub image: String,
    pub link: String,
}

/// Both catalog tiers, replaced wholesale on each upload.
///
/// `visible` is the curated precision subset searched first; `full` is the
/// larger recall fallback. No partial updates, no deletion.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub visible: Vec<Product>,
    pub full: Vec<Product>,
    pub uploaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// The snapshot a store holds before the first upload.
    pub fn empty() -> Self {
        Self {
            visible: Vec::new(),
            full: Vec::new(),
            uploaded_at: Utc::now(),
        }
    }
}

/// Filter criteria extracted from one match request. Scoped to that request.
///
/// `color` must already be canonical and `category` lowercased; the engine
/// compares them verbatim.
#[derive(Debug, Clone, Default)]
pub struct MatchQuery {
    /// Raw free-text user message.
    pub message: String,
    /// First requested color, canonicalized.
    pub color: Option<String>,
    /// First requested category, lowercased.
    pub category: Option<String>,
    /// Keyword strings matched case-insensitively against titles.
    pub keywords: Vec<String>,
}

impl MatchQuery {
    /// Character-style queries name a figure via the literal `" from "`
    /// pattern ("Eleven from Stranger Things"). Category scoring is
    /// suppressed for them.
    pub fn is_character_query(&self) -> bool {
        self.message.contains(" from ")
    }
}

/// Tunables for ingestion and the match pipeline.
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    /// Visible-tier positives below this count trigger the full-tier pass.
    pub min_results: usize,
    /// Maximum number of products returned per match.
    pub result_cap: usize,
    /// Base URL prefixed to relative image URLs at ingestion.
    pub asset_base: String,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            min_results: DEFAULT_MIN_RESULTS,
            result_cap: RESULT_CAP,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_query_needs_literal_from() {
        let q = MatchQuery {
            message: "Eleven from Stranger Things".into(),
            ..MatchQuery::default()
        };
        assert!(q.is_character_query());

        let q = MatchQuery {
            message: "pink dress".into(),
            ..MatchQuery::default()
        };
        assert!(!q.is_character_query());

        // No surrounding spaces, no match.
        let q = MatchQuery {
            message: "fromage lover outfit".into(),
            ..MatchQuery::default()
        };
        assert!(!q.is_character_query());
    }

    #[test]
    fn raw_product_tolerates_missing_fields() {
        let raw: RawProduct = serde_json::from_str(r#"{ "title": "Slip Dress" }"#).unwrap();
        assert_eq!(raw.title.as_deref(), Some("Slip Dress"));
        assert!(raw.color.is_none());
        assert!(raw.image.is_none());
        assert!(raw.link.is_none());
    }
}
