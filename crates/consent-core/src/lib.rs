#![deny(missing_docs)]

//! # consent-core — Domain Types for Consent Intake
//!
//! Everything the consent endpoint knows about its payload lives here. The
//! crate has no I/O: it parses nothing from the network and writes nothing to
//! storage. Callers (`consent-api`, `consent-cli`) hand it strings and get back
//! validated values or structured errors.
//!
//! ## Contents
//!
//! - [`rut`] — Chilean RUT normalization and modulo-11 check-digit validation.
//!   [`Rut`] is the validated newtype; [`rut::normalize`], [`rut::check_char`]
//!   and [`rut::is_valid`] are the free functions it is built on.
//! - [`email`] — the basic address shape check applied to submissions.
//! - [`submission`] — the inbound form payload and its validation pipeline.
//! - [`record`] — the JSON document persisted for every accepted consent.
//! - [`error`] — `thiserror` enums for every failure above.

pub mod email;
pub mod error;
pub mod record;
pub mod rut;
pub mod submission;

pub use email::is_valid_email;
pub use error::{PayloadError, RutError, SubmissionError, ValidationError};
pub use record::{submission_pathname, ClientInfo, ConsentRecord};
pub use rut::Rut;
pub use submission::{is_truthy, ConsentSubmission, ValidatedSubmission};
