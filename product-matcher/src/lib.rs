//! In-memory clothing catalog with keyword/color scoring and two-tier retrieval.
//!
//! Public API: a swap-on-upload [`CatalogStore`], ingestion-time
//! normalization ([`normalize_all`]) and the match pipeline
//! ([`match_catalog`]): score the curated `visible` tier, fall back to the
//! `full` tier when too few candidates, stable-rank, de-duplicate by image
//! URL and cap the result.

mod engine;
mod model;
mod normalizer;
mod scoring;
mod store;

pub use engine::match_catalog;
pub use model::{
    CatalogSnapshot, MatchPolicy, MatchQuery, MatchedProduct, Product, RawProduct,
    DEFAULT_ASSET_BASE, DEFAULT_MIN_RESULTS, RESULT_CAP,
};
pub use normalizer::{absolutize_image, canonical_color, normalize_all, safe_link};
pub use scoring::{score_product, CATEGORY_WEIGHT, COLOR_WEIGHT, KEYWORD_WEIGHT};
pub use store::CatalogStore;
