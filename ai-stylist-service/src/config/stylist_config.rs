/// Configuration for a stylist model invocation.
///
/// This struct contains the connection and sampling parameters for one
/// OpenAI-compatible chat model. It can be extended as needed to support
/// new parameters or a second profile.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"gpt-4o"`).
/// - `endpoint`: The API base URL (e.g., `"https://api.openai.com"`).
/// - `api_key`: Bearer token for authentication.
/// - `max_tokens`: Maximum number of tokens to generate (if supported).
/// - `temperature`: Controls randomness (0.0 = deterministic, >1.0 = more random).
/// - `top_p`: Nucleus sampling cutoff (alternative to temperature).
/// - `timeout_secs`: Optional request timeout in seconds.
/// - `json_mode`: Ask the API for a guaranteed-JSON response body.
#[derive(Debug, Clone)]
pub struct StylistConfig {
    /// Model identifier string (e.g., `"gpt-4o"`).
    pub model: String,

    /// API base URL, without the `/v1/...` suffix.
    pub endpoint: String,

    /// API key used as a Bearer token.
    pub api_key: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,

    /// When set, requests `response_format: {"type": "json_object"}` so the
    /// model must emit a single JSON object.
    pub json_mode: bool,
}
