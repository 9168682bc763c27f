//! # API Route Modules
//!
//! - `consent` — consent form intake (`POST /api/consent`).

pub mod consent;
