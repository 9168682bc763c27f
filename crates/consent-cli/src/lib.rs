//! # consent-cli — Operator CLI for consent intake
//!
//! Offline helpers around the same validation rules the API enforces.
//!
//! ## Subcommands
//!
//! - `consent rut normalize` — strip separators and uppercase.
//! - `consent rut check` — verify the check character of one or more RUTs.
//! - `consent rut dv` — compute the check character for a numeric body.
//! - `consent validate` — run the submission checks against a JSON file.
//!
//! ```bash
//! consent rut check 76.543.210-3 60803000-k
//! consent rut dv 76543210
//! consent validate submission.json
//! ```
//!
//! Every subcommand returns a process exit code: 0 on success, 1 when
//! input fails validation. Operational errors (unreadable files) surface
//! as `anyhow` errors and exit with 2.

pub mod rut;
pub mod validate;
