use ai_stylist_service::stylist::OutfitBrief;
use serde::Serialize;

/// Response body carrying the extracted outfit brief.
#[derive(Debug, Serialize)]
pub struct StylistResponse {
    pub data: OutfitBrief,
}
