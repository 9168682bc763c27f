//! # HTTP Middleware
//!
//! - `metrics` — Prometheus request counters and latency histograms.

pub mod metrics;
