use serde::Deserialize;

/// Request body for the stylist endpoint.
///
/// `userMessage` goes to the model as-is; an absent field means an empty
/// prompt, not a rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylistRequest {
    #[serde(default)]
    pub user_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_message_defaults_to_empty() {
        let req: StylistRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.user_message, "");
    }

    #[test]
    fn user_message_uses_the_camel_case_key() {
        let req: StylistRequest =
            serde_json::from_str(r#"{"userMessage": "dress me like Eleven"}"#).unwrap();
        assert_eq!(req.user_message, "dress me like Eleven");
    }
}
