//! Lenient JSON recovery for chat-model output.
//!
//! Even with JSON mode requested, models sometimes wrap the object in prose
//! or a markdown code fence. Recovery is two attempts, in order:
//!
//! 1. strict parse of the whole output;
//! 2. parse of the widest brace-delimited slice, from the first `{` to the
//!    last `}`.
//!
//! Anything that survives neither attempt is unrecoverable here and the
//! caller reports it as invalid model output.

use serde_json::Value;

/// A successfully recovered JSON value, tagged with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum RepairedJson {
    /// The whole output parsed as-is.
    Strict(Value),
    /// A brace-delimited slice of the output parsed.
    Extracted(Value),
}

impl RepairedJson {
    /// Label for logs.
    pub fn stage(&self) -> &'static str {
        match self {
            RepairedJson::Strict(_) => "strict",
            RepairedJson::Extracted(_) => "extracted",
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            RepairedJson::Strict(v) | RepairedJson::Extracted(v) => v,
        }
    }
}

/// Attempts to recover a JSON value from raw model output.
///
/// Returns `None` when neither the full output nor its widest `{...}` slice
/// parses as JSON.
pub fn repair_json(raw: &str) -> Option<RepairedJson> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Some(RepairedJson::Strict(value));
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str::<Value>(&raw[start..=end])
        .ok()
        .map(RepairedJson::Extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_object_parses_strictly() {
        let out = repair_json(r#"{"vibe": "casual"}"#).unwrap();
        assert_eq!(out, RepairedJson::Strict(json!({"vibe": "casual"})));
    }

    #[test]
    fn fenced_object_is_extracted() {
        let raw = "```json\n{\"vibe\": \"retro\"}\n```";
        let out = repair_json(raw).unwrap();
        assert_eq!(out.stage(), "extracted");
        assert_eq!(out.into_value(), json!({"vibe": "retro"}));
    }

    #[test]
    fn prose_wrapped_object_keeps_nested_braces() {
        let raw = r#"Sure! Here is the outfit: {"pieces": [{"name": "dress"}]} Hope it helps."#;
        let out = repair_json(raw).unwrap();
        assert_eq!(out.into_value(), json!({"pieces": [{"name": "dress"}]}));
    }

    #[test]
    fn braceless_output_is_unrecoverable() {
        assert!(repair_json("no json here at all").is_none());
    }

    #[test]
    fn reversed_braces_are_unrecoverable() {
        assert!(repair_json("} nothing {").is_none());
    }

    #[test]
    fn invalid_body_inside_braces_is_unrecoverable() {
        assert!(repair_json("{definitely not json}").is_none());
    }
}
