//! OpenAI (ChatGPT) service for text generation.
//!
//! Minimal, non-streaming client around the OpenAI REST API. The endpoint is
//! derived from `StylistConfig::endpoint`:
//! - POST {endpoint}/v1/chat/completions (non-streaming chat completion)
//!
//! Constructor validation:
//! - `cfg.api_key` must be non-empty
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized via unified error types in `error_handler`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::stylist_config::StylistConfig,
    error_handler::{StylistError, UpstreamError, make_snippet},
};

/// Thin client for the OpenAI chat-completions API.
///
/// Constructed from a complete [`StylistConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (with timeout and default headers).
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: StylistConfig,
    url_chat: String,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// Validates the API key and endpoint scheme, then builds an HTTP client
    /// with default headers and a configurable timeout.
    ///
    /// # Errors
    /// - [`StylistError::Upstream`] with `MissingApiKey` if `cfg.api_key` is empty
    /// - [`StylistError::Upstream`] with `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`StylistError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: StylistConfig) -> Result<Self, StylistError> {
        // 1) API key must be present.
        if cfg.api_key.trim().is_empty() {
            return Err(UpstreamError::MissingApiKey.into());
        }

        // 2) Endpoint must use http/https.
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(UpstreamError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }

        // 3) HTTP client: timeout + default headers.
        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key)).map_err(|e| {
                UpstreamError::Decode(format!("invalid API key header: {e}"))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_chat = format!("{}/v1/chat/completions", base);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs.unwrap_or(60),
            json_mode = cfg.json_mode,
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// The config this client was built from.
    pub fn config(&self) -> &StylistConfig {
        &self.cfg
    }

    /// Performs a **non-streaming** chat completion request (`/v1/chat/completions`).
    ///
    /// Minimal `messages` array:
    /// - optional system message (if provided)
    /// - user message with `prompt`.
    ///
    /// Mapped options from config: `model`, `temperature`, `top_p`,
    /// `max_tokens`, and `response_format` when JSON mode is on.
    ///
    /// # Errors
    /// - [`StylistError::Upstream`] with `HttpStatus` for non-2xx responses
    /// - [`StylistError::HttpTransport`] for client/network failures
    /// - [`StylistError::Upstream`] with `Decode` if the JSON cannot be parsed
    /// - [`StylistError::Upstream`] with `EmptyChoices` if no choices are returned
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, StylistError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt, system);

        debug!(
            model = %self.cfg.model,
            endpoint = %self.cfg.endpoint,
            prompt_len = prompt.len(),
            has_system = system.is_some(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                endpoint = %self.cfg.endpoint,
                latency_ms = started.elapsed().as_millis(),
                "OpenAI /v1/chat/completions returned non-success status"
            );

            return Err(UpstreamError::HttpStatus {
                status,
                url,
                snippet,
            }
            .into());
        }

        let out: ChatCompletionResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    endpoint = %self.cfg.endpoint,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode /v1/chat/completions response"
                );
                return Err(UpstreamError::Decode(format!(
                    "serde error: {e}; expected `choices[0].message.content`"
                ))
                .into());
            }
        };

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or(UpstreamError::EmptyChoices)?;

        info!(
            model = %self.cfg.model,
            endpoint = %self.cfg.endpoint,
            latency_ms = started.elapsed().as_millis(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads & options
======================================================================== */

/// Minimal request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds a minimal chat request from config, `prompt`, and an optional system message.
    fn from_cfg(cfg: &'a StylistConfig, prompt: &'a str, system: Option<&'a str>) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(sys) = system {
            messages.push(ChatMessage {
                role: "system",
                content: Some(sys),
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: Some(prompt),
        });

        Self {
            model: &cfg.model,
            messages,
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            max_tokens: cfg.max_tokens,
            response_format: cfg.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        }
    }
}

/// Chat message for the OpenAI API.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    /// One of: "system" | "user" | "assistant" | ...
    role: &'a str,
    /// Plain string content; for advanced payloads OpenAI also accepts arrays of parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// `response_format` object asking for a guaranteed JSON body.
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Minimal response for `/v1/chat/completions`.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}
