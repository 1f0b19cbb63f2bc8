use product_matcher::MatchedProduct;
use serde::Serialize;

/// Response body: ranked, deduplicated products for the storefront rail.
#[derive(Debug, Serialize)]
pub struct MatchProductsResponse {
    pub results: Vec<MatchedProduct>,
}
