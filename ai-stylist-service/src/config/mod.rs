//! Configuration for the stylist upstream.

pub mod default_config;
pub mod stylist_config;
