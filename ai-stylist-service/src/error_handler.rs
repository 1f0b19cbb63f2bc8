//! Unified error handling for `ai-stylist-service`.
//!
//! This module exposes a single top-level error type [`StylistError`] for the
//! whole library, and groups domain-specific errors in nested enums
//! ([`ConfigError`], [`UpstreamError`]). Small helpers for reading/validating
//! environment variables are provided and return the unified [`Result<T>`]
//! alias.
//!
//! All messages include the prefix `[AI Stylist]` to simplify attribution in
//! logs, except [`StylistError::InvalidOutfitJson`], whose display text goes
//! out on the wire verbatim.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, StylistError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `ai-stylist-service` crate.
///
/// Variants wrap domain-specific enums (config/upstream) and a few common
/// cases. Prefer adding new sub-enums for distinct domains instead of growing
/// this type indefinitely.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StylistError {
    /// Configuration/validation errors (startup/readiness).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Errors talking to or decoding the chat-completions upstream.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("[AI Stylist] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// The model responded, but nothing parseable as an outfit came back.
    /// Display text is the exact message the API returns to clients.
    #[error("Invalid JSON from AI")]
    InvalidOutfitJson,
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
///
/// Keep this focused: only errors that realistically happen at config
/// load/validation time.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[AI Stylist] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (like ports, limits, timeouts).
    #[error("[AI Stylist] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `LLM_MAX_TOKENS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u32`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[AI Stylist] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OPENAI_API_BASE`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* Upstream errors                                                           */
/* ------------------------------------------------------------------------- */

/// Error enum for the chat-completions upstream.
///
/// Covers construction-time validation of the client plus connectivity,
/// protocol, and decoding problems at call time.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No API key was configured for an authenticated provider.
    #[error("[AI Stylist] missing API key")]
    MissingApiKey,

    /// The endpoint is empty or does not start with http/https.
    #[error("[AI Stylist] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Upstream returned a non-successful HTTP status.
    #[error("[AI Stylist] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("[AI Stylist] decode error: {0}")]
    Decode(String),

    /// The completion came back with no usable choices.
    #[error("[AI Stylist] empty choices in completion response")]
    EmptyChoices,
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`StylistError::Config`] with [`ConfigError::MissingVar`] if the
/// variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`StylistError::Config`] with [`ConfigError::InvalidNumber`] if the
/// variable is set but not a valid `u32`.
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u32>().map(Some).map_err(|_| {
            StylistError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`StylistError::Config`] with [`ConfigError::InvalidNumber`] if the
/// variable is set but not a valid `u64`.
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u64>().map(Some).map_err(|_| {
            StylistError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers (return unified `Result<T>`)                           */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`StylistError::Config`] with [`ConfigError::InvalidFormat`] when
/// the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/* ------------------------------------------------------------------------- */
/* Misc helpers                                                              */
/* ------------------------------------------------------------------------- */

/// Maximum number of bytes kept from an upstream body in error snippets.
const MAX_SNIPPET_BYTES: usize = 240;

/// Trims an upstream body down to a short, log-friendly snippet.
///
/// The cut is clamped to a UTF-8 character boundary so multibyte payloads
/// never panic.
pub fn make_snippet(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.len() <= MAX_SNIPPET_BYTES {
        return trimmed.to_string();
    }
    let mut end = MAX_SNIPPET_BYTES;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_become_trimmed_snippets() {
        assert_eq!(make_snippet("  {\"error\":\"nope\"}  "), "{\"error\":\"nope\"}");
    }

    #[test]
    fn long_bodies_are_cut_with_ellipsis() {
        let body = "x".repeat(1000);
        let snippet = make_snippet(&body);
        assert_eq!(snippet.len(), MAX_SNIPPET_BYTES + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn snippet_cut_respects_char_boundaries() {
        let body = "é".repeat(500);
        let snippet = make_snippet(&body);
        assert!(snippet.ends_with("..."));
        // Would have panicked on a mid-char slice.
        assert!(snippet.chars().all(|c| c == 'é' || c == '.'));
    }

    #[test]
    fn invalid_outfit_json_displays_the_wire_message() {
        assert_eq!(StylistError::InvalidOutfitJson.to_string(), "Invalid JSON from AI");
    }
}
