//! # Error Hierarchy
//!
//! Structured errors for consent intake, built with `thiserror`.
//!
//! [`ValidationError`] covers domain-primitive construction (currently the
//! [`Rut`](crate::Rut) newtype). [`SubmissionError`] is the request-level
//! taxonomy: each variant is terminal for the request and its `Display`
//! output is the message shown to the person filling in the form.

use thiserror::Error;

/// Why a RUT was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RutError {
    /// Fewer than two characters remain after normalization.
    #[error("too short after normalization")]
    TooShort,

    /// Something other than ASCII digits precedes the check character.
    #[error("body contains non-digit characters")]
    NonDigitBody,

    /// The supplied check character does not match the computed one.
    #[error("check character mismatch (expected {expected}, got {supplied})")]
    CheckMismatch {
        /// Check character computed from the body.
        expected: char,
        /// Check character found in the input.
        supplied: char,
    },
}

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// RUT failed normalization or check-digit verification.
    #[error("invalid RUT \"{value}\": {reason}")]
    InvalidRut {
        /// The input as received.
        value: String,
        /// The specific check that failed.
        reason: RutError,
    },
}

/// Request-level validation failures for a consent submission.
///
/// Checks run in declaration order and the first failure is reported.
/// The `Display` strings are user-facing and returned verbatim in the
/// `error` field of the 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// `aceptaTerminos` was absent or false.
    #[error("Debe aceptar términos.")]
    TermsNotAccepted,

    /// Name, RUT or email was empty after trimming.
    #[error("Faltan campos.")]
    MissingFields,

    /// The email address failed the basic shape check.
    #[error("Email inválido.")]
    InvalidEmail,

    /// The company RUT failed normalization or check-digit verification.
    #[error("RUT inválido.")]
    InvalidRut(#[source] ValidationError),
}

/// Payload shapes that cannot be turned into a [`ConsentSubmission`](crate::ConsentSubmission).
///
/// Messages name the field and the JSON type only, never the value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The body was the JSON literal `null`.
    #[error("request body is null")]
    NullBody,

    /// A text field held a non-empty value that is not a string.
    #[error("field `{field}` must be a string, got {found}")]
    NonStringField {
        /// Wire name of the field.
        field: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },
}

impl SubmissionError {
    /// Stable machine-readable label, used for log fields and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TermsNotAccepted => "terms_not_accepted",
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidRut(_) => "invalid_rut",
        }
    }
}
