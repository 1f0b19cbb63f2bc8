//! High-level stylist pipeline: fixed prompt, chat completion, typed
//! outfit extraction.
//!
//! The pipeline is deliberately strict on output shape: whatever JSON is
//! recovered from the model must carry a `pieces` array or the whole
//! response counts as invalid. `character` and `vibe` stay optional and are
//! passed through only when the model produced them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::stylist_config::StylistConfig;
use crate::error_handler::{Result, StylistError};
use crate::json_repair::repair_json;
use crate::services::open_ai_service::OpenAiService;

/// System prompt sent with every stylist completion. The wording is part of
/// the product behavior, keep it stable.
pub const STYLIST_SYSTEM_PROMPT: &str = r#"
You are Clotheme.ai — an AI stylist.
Respond ONLY in this exact JSON format:

{
  "character": "...",
  "pieces": [
    { "name": "...", "keywords": ["...", "..."] }
  ],
  "vibe": "..."
}

Rules:
- NO prices
- NO brand names
- NO retailer names
- NO markdown
- Output ONLY JSON, no extra text
"#;

/// One garment in the outfit brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitPiece {
    /// Garment name (e.g., `"pleated skirt"`).
    pub name: String,
    /// Search keywords describing the piece. Models occasionally omit them.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Structured outfit brief extracted from model output.
///
/// `pieces` is the contract: recovered JSON without it is rejected. An empty
/// array is accepted, the stylist simply had nothing concrete to suggest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitBrief {
    /// Persona the outfit is styled after, when the request named one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,

    /// Garments making up the look.
    pub pieces: Vec<OutfitPiece>,

    /// One-line mood description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
}

/// Converts raw model output into a typed [`OutfitBrief`].
///
/// Runs the lenient JSON recovery first, then strict deserialization.
///
/// # Errors
/// Returns [`StylistError::InvalidOutfitJson`] when no JSON can be recovered
/// or the recovered value does not deserialize into an outfit brief.
pub fn outfit_from_output(raw: &str) -> Result<OutfitBrief> {
    let Some(repaired) = repair_json(raw) else {
        warn!(output_len = raw.len(), "model output contained no parseable JSON");
        return Err(StylistError::InvalidOutfitJson);
    };

    let stage = repaired.stage();
    match serde_json::from_value::<OutfitBrief>(repaired.into_value()) {
        Ok(brief) => {
            debug!(stage, pieces = brief.pieces.len(), "outfit brief extracted");
            Ok(brief)
        }
        Err(e) => {
            warn!(stage, error = %e, "recovered JSON is not a valid outfit brief");
            Err(StylistError::InvalidOutfitJson)
        }
    }
}

/// The stylist: owns the upstream client and the fixed system prompt.
#[derive(Debug)]
pub struct StylistService {
    client: OpenAiService,
}

impl StylistService {
    /// Builds the stylist on top of a validated [`OpenAiService`].
    ///
    /// # Errors
    /// Propagates client construction failures (bad key/endpoint).
    pub fn new(cfg: StylistConfig) -> Result<Self> {
        Ok(Self {
            client: OpenAiService::new(cfg)?,
        })
    }

    /// The upstream config, for health probing and diagnostics.
    pub fn config(&self) -> &StylistConfig {
        self.client.config()
    }

    /// Asks the model for an outfit brief for `user_message`.
    ///
    /// # Errors
    /// - [`StylistError::InvalidOutfitJson`] when the model output cannot be
    ///   recovered into a valid brief
    /// - upstream/transport errors from the completion call
    pub async fn suggest_outfit(&self, user_message: &str) -> Result<OutfitBrief> {
        let raw = self
            .client
            .generate(user_message, Some(STYLIST_SYSTEM_PROMPT))
            .await?;
        outfit_from_output(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_output_parses() {
        let raw = r#"{"character": "Eleven", "pieces": [{"name": "dress", "keywords": ["floral"]}], "vibe": "80s"}"#;
        let brief = outfit_from_output(raw).unwrap();
        assert_eq!(brief.character.as_deref(), Some("Eleven"));
        assert_eq!(brief.pieces.len(), 1);
        assert_eq!(brief.pieces[0].keywords, vec!["floral"]);
        assert_eq!(brief.vibe.as_deref(), Some("80s"));
    }

    #[test]
    fn fenced_output_is_recovered() {
        let raw = "```json\n{\"pieces\": [{\"name\": \"blazer\"}]}\n```";
        let brief = outfit_from_output(raw).unwrap();
        assert_eq!(brief.pieces[0].name, "blazer");
        assert!(brief.pieces[0].keywords.is_empty());
    }

    #[test]
    fn empty_pieces_array_is_a_valid_brief() {
        let brief = outfit_from_output(r#"{"pieces": []}"#).unwrap();
        assert!(brief.pieces.is_empty());
        assert!(brief.character.is_none());
    }

    #[test]
    fn missing_pieces_is_invalid() {
        let err = outfit_from_output(r#"{"character": "Eleven", "vibe": "80s"}"#).unwrap_err();
        assert!(matches!(err, StylistError::InvalidOutfitJson));
    }

    #[test]
    fn garbage_output_is_invalid() {
        let err = outfit_from_output("I'd suggest something cozy!").unwrap_err();
        assert!(matches!(err, StylistError::InvalidOutfitJson));
    }

    #[test]
    fn absent_fields_stay_off_the_wire() {
        let brief = outfit_from_output(r#"{"pieces": [{"name": "jeans"}]}"#).unwrap();
        let json = serde_json::to_value(&brief).unwrap();
        assert!(json.get("character").is_none());
        assert!(json.get("vibe").is_none());
        assert_eq!(json["pieces"][0]["name"], "jeans");
    }
}
