//! OpenAI-backed AI stylist.
//!
//! The crate wraps the OpenAI chat-completions API behind a small, typed
//! surface for one job: turning a shopper's free-text request into a
//! structured outfit brief. Model output is requested in JSON mode, then run
//! through a lenient repair step before strict deserialization, since chat
//! models occasionally wrap their JSON in prose or code fences.
//!
//! Entry points:
//! - [`stylist::StylistService`]: high-level prompt + parse pipeline
//! - [`services::open_ai_service::OpenAiService`]: raw chat completions
//! - [`health_service::HealthService`]: resilient upstream probing

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod json_repair;
pub mod services;
pub mod stylist;
pub mod telemetry;
