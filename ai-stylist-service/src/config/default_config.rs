//! Default stylist config loaded strictly from environment variables.
//!
//! This module provides the convenience constructor for [`StylistConfig`]
//! used by the backend binary. A second profile (e.g., a faster drafting
//! model) can be added here under the same pattern.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`      = API key (mandatory)
//! - `OPENAI_API_BASE`     = API base URL (optional, default `https://api.openai.com`)
//! - `STYLIST_MODEL`       = model identifier (optional, default `gpt-4o`)
//! - `LLM_MAX_TOKENS`      = optional max tokens (u32)
//! - `OPENAI_TIMEOUT_SECS` = optional request timeout in seconds (u64)

use crate::{
    config::stylist_config::StylistConfig,
    error_handler::{Result, env_opt_u32, env_opt_u64, must_env, validate_http_endpoint},
};

/// Default API base when `OPENAI_API_BASE` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Default model when `STYLIST_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default request timeout in seconds when `OPENAI_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Constructs the stylist config from environment.
///
/// JSON mode is always on for this profile: the stylist prompt demands a
/// bare JSON object and the parser expects one.
///
/// # Defaults
/// - `temperature = Some(0.2)`
/// - `timeout_secs = Some(60)`
///
/// # Errors
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is absent or empty
/// - [`ConfigError::InvalidFormat`] if `OPENAI_API_BASE` has no http/https scheme
/// - [`ConfigError::InvalidNumber`] if a numeric variable fails to parse
///
/// [`ConfigError::MissingVar`]: crate::error_handler::ConfigError::MissingVar
/// [`ConfigError::InvalidFormat`]: crate::error_handler::ConfigError::InvalidFormat
/// [`ConfigError::InvalidNumber`]: crate::error_handler::ConfigError::InvalidNumber
pub fn config_openai_stylist() -> Result<StylistConfig> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let endpoint = env_or("OPENAI_API_BASE", DEFAULT_ENDPOINT);
    validate_http_endpoint("OPENAI_API_BASE", &endpoint)?;

    let model = env_or("STYLIST_MODEL", DEFAULT_MODEL);
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("OPENAI_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(StylistConfig {
        model,
        endpoint,
        api_key,
        max_tokens,
        temperature: Some(0.2),
        top_p: None,
        timeout_secs: Some(timeout_secs),
        json_mode: true,
    })
}
