//! Health service for the stylist upstream.
//!
//! Exposes a lightweight probe against the OpenAI-compatible API:
//! `GET {endpoint}/v1/models` with Bearer auth (best-effort model existence
//! check).
//!
//! The returned [`HealthStatus`] is JSON-serializable and suitable for a
//! `/health` endpoint. [`HealthService::check`] is resilient and never fails
//! (errors mapped to `ok=false`). The strict probe (`try_probe`) returns a
//! plain `Result`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::stylist_config::StylistConfig;
use crate::error_handler::{StylistError, UpstreamError, make_snippet};

/// A serializable health snapshot for the configured upstream.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Optional model identifier relevant to the probe (if any).
    pub model: Option<String>,
    /// Overall health flag.
    pub ok: bool,
    /// Measured HTTP latency in milliseconds for the main probe.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    #[inline]
    fn ok(
        endpoint: &str,
        model: Option<&str>,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            model: model.map(str::to_string),
            ok: true,
            latency_ms,
            message: message.into(),
        }
    }

    #[inline]
    fn fail(
        endpoint: &str,
        model: Option<&str>,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            model: model.map(str::to_string),
            ok: false,
            latency_ms,
            message: message.into(),
        }
    }
}

/// A health checker that reuses a single HTTP client.
///
/// The client is constructed with a default timeout. Individual probes may
/// override the timeout per request based on the provided config.
pub struct HealthService {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl HealthService {
    /// Creates a new health service with an optional client timeout (seconds).
    ///
    /// The internal client is reused across all probes.
    ///
    /// # Errors
    /// Returns [`StylistError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, StylistError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        info!(
            default_timeout_secs = timeout.as_secs(),
            "HealthService initialized"
        );

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Checks health for the given upstream config.
    ///
    /// This method is **resilient**: it never returns an error. Any failure is
    /// converted to `HealthStatus { ok: false, message: ... }`, which is
    /// convenient for `/health`-style endpoints.
    pub async fn check(&self, cfg: &StylistConfig) -> HealthStatus {
        // Quick endpoint validation to avoid obvious issues.
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            warn!(
                endpoint = %cfg.endpoint,
                "invalid endpoint (empty or missing http/https)"
            );
            return HealthStatus::fail(
                endpoint,
                Some(&cfg.model),
                0,
                "endpoint is empty or missing http/https",
            );
        }

        let start = Instant::now();
        match self.try_probe(cfg).await {
            Ok(mut status) => {
                if status.latency_ms == 0 {
                    status.latency_ms = start.elapsed().as_millis();
                }
                info!(
                    endpoint = %status.endpoint,
                    model = %status.model.as_deref().unwrap_or("n/a"),
                    ok = status.ok,
                    latency_ms = status.latency_ms,
                    "health probe completed"
                );
                status
            }
            Err(err) => {
                let status = HealthStatus::fail(
                    &cfg.endpoint,
                    Some(&cfg.model),
                    start.elapsed().as_millis(),
                    err.to_string(),
                );
                warn!(
                    endpoint = %status.endpoint,
                    model = %status.model.as_deref().unwrap_or("n/a"),
                    latency_ms = status.latency_ms,
                    message = %status.message,
                    "health probe failed"
                );
                status
            }
        }
    }

    /// Strict probe. Returns an error on hard failures.
    ///
    /// Probe:
    /// - `GET {endpoint}/v1/models` with `Authorization: Bearer <api_key>`
    /// - Ensure 2xx
    /// - Best-effort: verify `cfg.model` exists in the returned list
    async fn try_probe(&self, cfg: &StylistConfig) -> Result<HealthStatus, StylistError> {
        let base = cfg.endpoint.trim_end_matches('/').to_string();
        let url = format!("{}/v1/models", base);
        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(self.default_timeout);

        if cfg.api_key.trim().is_empty() {
            return Err(UpstreamError::MissingApiKey.into());
        }

        let auth_header = header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key))
            .map_err(|e| UpstreamError::Decode(format!("invalid API key header: {e}")))?;

        let start = Instant::now();
        debug!(
            endpoint = %cfg.endpoint,
            model = %cfg.model,
            "GET {}", url
        );

        let resp = self
            .client
            .get(&url)
            .timeout(timeout)
            .header(header::AUTHORIZATION, auth_header)
            .send()
            .await
            .map_err(StylistError::from)?;

        let latency = start.elapsed().as_millis();

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %url,
                %status,
                %snippet,
                latency_ms = latency,
                "health GET /v1/models returned non-success status"
            );

            return Err(UpstreamError::HttpStatus {
                status,
                url,
                snippet,
            }
            .into());
        }

        // Expected minimal JSON: { "data": [ { "id": "<model>" }, ... ] }
        #[derive(serde::Deserialize)]
        struct ModelItem {
            id: String,
        }
        #[derive(serde::Deserialize)]
        struct Models {
            data: Vec<ModelItem>,
        }

        match resp.json::<Models>().await {
            Ok(models) => {
                let exists = models.data.iter().any(|m| m.id == cfg.model);
                if exists {
                    Ok(HealthStatus::ok(
                        &cfg.endpoint,
                        Some(&cfg.model),
                        latency,
                        "upstream is healthy; model is available",
                    ))
                } else {
                    Ok(HealthStatus::fail(
                        &cfg.endpoint,
                        Some(&cfg.model),
                        latency,
                        "upstream is up, but model not found in /v1/models",
                    ))
                }
            }
            Err(e) => {
                warn!(
                    endpoint = %cfg.endpoint,
                    model = %cfg.model,
                    error = %e,
                    latency_ms = latency,
                    "failed to decode /v1/models; treating upstream as reachable"
                );
                Ok(HealthStatus::ok(
                    &cfg.endpoint,
                    Some(&cfg.model),
                    latency,
                    format!("upstream is reachable; failed to decode /v1/models: {e}"),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(endpoint: &str, api_key: &str) -> StylistConfig {
        StylistConfig {
            model: "gpt-4o".to_string(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: Some(1),
            json_mode: true,
        }
    }

    #[tokio::test]
    async fn invalid_endpoint_fails_without_probing() {
        let svc = HealthService::new(Some(1)).unwrap();
        let status = svc.check(&cfg("not-a-url", "sk-test")).await;
        assert!(!status.ok);
        assert_eq!(status.latency_ms, 0);
        assert!(status.message.contains("http"));
    }

    #[tokio::test]
    async fn empty_api_key_fails_resiliently() {
        let svc = HealthService::new(Some(1)).unwrap();
        let status = svc.check(&cfg("https://api.openai.com", "")).await;
        assert!(!status.ok);
        assert!(status.message.contains("missing API key"));
    }
}
