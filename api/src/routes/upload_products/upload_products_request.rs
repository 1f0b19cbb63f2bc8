use product_matcher::RawProduct;
use serde::Deserialize;

/// Request body for the catalog upload.
///
/// `products` stays optional so an absent key gets the domain-specific
/// "No products provided" answer instead of a generic decode error.
#[derive(Debug, Deserialize)]
pub struct UploadProductsRequest {
    #[serde(default)]
    pub products: Option<ProductsPayload>,
}

/// The two catalog tiers as sent by the storefront.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsPayload {
    /// Products currently rendered on screen.
    #[serde(default)]
    pub visible: Vec<RawProduct>,
    /// The whole extracted catalog.
    #[serde(default)]
    pub full: Vec<RawProduct>,
}
