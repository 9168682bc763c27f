//! # Consent Submission
//!
//! The form payload as it arrives (`ConsentSubmission`) and the checked
//! value the rest of the pipeline works with (`ValidatedSubmission`).
//!
//! Decoding is lenient in the way browser-side form code is:
//!
//! - a top level that is not an object (array, string, number, boolean)
//!   carries no fields and decodes as an empty submission;
//! - a text field that is absent or falsy (`null`, `false`, `0`, `""`)
//!   counts as empty; any other non-string value is a [`PayloadError`];
//! - the acceptance flag is truthy unless it is absent, `null`, `false`,
//!   `0` or `""`.
//!
//! So a sparse or oddly typed payload reaches [`ConsentSubmission::validate`]
//! and gets the proper user-facing message instead of a parse error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::email::is_valid_email;
use crate::error::{PayloadError, SubmissionError};
use crate::rut::Rut;

/// Inbound consent form payload.
///
/// `Deserialize` goes through [`ConsentSubmission::from_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ConsentSubmission {
    /// Full name of the person giving consent.
    pub nombre: Option<String>,
    /// Company RUT, in any common formatting.
    pub rut_empresa: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Whether the terms were accepted.
    pub acepta_terminos: Option<bool>,
}

impl ConsentSubmission {
    /// Build a submission from an already parsed JSON document.
    ///
    /// Text fields are read before the acceptance flag, so a badly typed
    /// field is reported even when the terms were not accepted.
    ///
    /// # Errors
    ///
    /// [`PayloadError::NullBody`] for a `null` document and
    /// [`PayloadError::NonStringField`] for a truthy non-string text field.
    pub fn from_json(value: Value) -> Result<Self, PayloadError> {
        let fields = match value {
            Value::Null => return Err(PayloadError::NullBody),
            Value::Object(fields) => fields,
            _ => return Ok(Self::default()),
        };

        Ok(Self {
            nombre: text_field(&fields, "nombre")?,
            rut_empresa: text_field(&fields, "rutEmpresa")?,
            email: text_field(&fields, "email")?,
            acepta_terminos: fields.get("aceptaTerminos").map(is_truthy),
        })
    }
}

impl<'de> Deserialize<'de> for ConsentSubmission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(serde::de::Error::custom)
    }
}

/// JavaScript truthiness of a JSON value.
///
/// `null`, `false`, zero and the empty string are false; everything else,
/// including empty arrays and objects, is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_field(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<String>, PayloadError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(v) if is_truthy(v) => Err(PayloadError::NonStringField {
            field: name,
            found: json_type(v),
        }),
        _ => Ok(None),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A submission that passed every check. The RUT is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    /// Trimmed name.
    pub nombre: String,
    /// Validated, normalized company RUT.
    pub rut_empresa: Rut,
    /// Trimmed email.
    pub email: String,
}

impl ConsentSubmission {
    /// Run the submission checks in order, stopping at the first failure:
    ///
    /// 1. terms accepted,
    /// 2. name, RUT and email non-empty after trimming,
    /// 3. email shape,
    /// 4. RUT check character.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmissionError`] for the first failed check.
    pub fn validate(self) -> Result<ValidatedSubmission, SubmissionError> {
        let nombre = trimmed(self.nombre);
        let rut_empresa = trimmed(self.rut_empresa);
        let email = trimmed(self.email);

        if !self.acepta_terminos.unwrap_or(false) {
            return Err(SubmissionError::TermsNotAccepted);
        }
        if nombre.is_empty() || rut_empresa.is_empty() || email.is_empty() {
            return Err(SubmissionError::MissingFields);
        }
        if !is_valid_email(&email) {
            return Err(SubmissionError::InvalidEmail);
        }
        let rut_empresa = Rut::new(rut_empresa).map_err(SubmissionError::InvalidRut)?;

        Ok(ValidatedSubmission {
            nombre,
            rut_empresa,
            email,
        })
    }
}

fn trimmed(value: Option<String>) -> String {
    match value {
        Some(s) => s.trim_matches(is_form_whitespace).to_string(),
        None => String::new(),
    }
}

/// Whitespace as browsers trim it: Unicode `White_Space` plus the byte order
/// mark, minus NEL (U+0085).
fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}
