//! Smart Goals - Rule-based SMART goal synthesis
//!
//! This crate turns a free-text personal goal into structured data (domain,
//! intent, timeframe, metrics, constraints) and from that into the five
//! SMART components: Specific, Measurable, Achievable, Relevant and
//! Time-bound. Everything is deterministic keyword, regex and template
//! logic; no models or network calls are involved.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
