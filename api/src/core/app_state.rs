use ai_stylist_service::config::default_config::config_openai_stylist;
use ai_stylist_service::health_service::HealthService;
use ai_stylist_service::stylist::StylistService;
use product_matcher::{CatalogStore, DEFAULT_ASSET_BASE, DEFAULT_MIN_RESULTS, MatchPolicy, RESULT_CAP};
use tracing::warn;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// In-memory product catalog, replaced wholesale on each upload.
    pub store: CatalogStore,
    /// Outfit stylist backed by the chat-completions upstream.
    pub stylist: StylistService,
    /// Resilient upstream prober behind `/health/upstream`.
    pub health: HealthService,
    /// Matching knobs (result threshold/cap, asset base for image URLs).
    pub policy: MatchPolicy,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Fails when the stylist upstream is misconfigured, most commonly a
    /// missing `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, AppError> {
        let cfg = config_openai_stylist()?;
        let stylist = StylistService::new(cfg)?;
        let health = HealthService::new(None)?;

        let policy = MatchPolicy {
            min_results: env_usize_or("MATCH_MIN_RESULTS", DEFAULT_MIN_RESULTS),
            result_cap: RESULT_CAP,
            asset_base: env_or("ASSET_BASE_URL", DEFAULT_ASSET_BASE),
        };

        Ok(Self {
            store: CatalogStore::new(),
            stylist,
            health,
            policy,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_usize_or(name: &'static str, default: usize) -> usize {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                warn!(var = name, value = %v, "not a valid number, using default");
                default
            }
        },
        _ => default,
    }
}
