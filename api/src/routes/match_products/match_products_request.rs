use product_matcher::{MatchQuery, canonical_color};
use serde::Deserialize;

/// Request body for product matching.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchProductsRequest {
    /// Raw shopper message. Required; blank counts as missing.
    #[serde(default)]
    pub user_message: Option<String>,
    /// Optional criteria extracted client-side from the conversation.
    #[serde(default)]
    pub context: Option<MatchContext>,
}

/// Matching criteria as sent by the frontend.
#[derive(Debug, Default, Deserialize)]
pub struct MatchContext {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl MatchProductsRequest {
    /// Maps the wire shape onto a [`MatchQuery`].
    ///
    /// Takes the first non-empty color (canonicalized) and category
    /// (lowercased), drops blank keywords, and returns `None` when
    /// `userMessage` is missing or blank.
    pub fn to_query(&self) -> Option<MatchQuery> {
        let message = self.user_message.as_deref()?.trim();
        if message.is_empty() {
            return None;
        }

        let ctx = self.context.as_ref();
        let color = ctx
            .and_then(|c| c.colors.iter().find(|s| !s.trim().is_empty()))
            .map(|s| canonical_color(s));
        let category = ctx
            .and_then(|c| c.categories.iter().find(|s| !s.trim().is_empty()))
            .map(|s| s.trim().to_lowercase());
        let keywords = ctx
            .map(|c| {
                c.keywords
                    .iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Some(MatchQuery {
            message: message.to_string(),
            color,
            category,
            keywords,
        })
    }
}
