//! Upstream provider clients.

pub mod open_ai_service;
