//! # RUT — Chilean Tax Identifier
//!
//! A RUT (Rol Único Tributario) is a run of decimal digits followed by one
//! check character in `0-9` or `K`. It is commonly written with thousands
//! separators and a hyphen before the check character (`76.543.210-3`), and
//! sometimes in lowercase (`60.803.000-k`).
//!
//! ## Check character
//!
//! Digits are read from least to most significant and multiplied by weights
//! cycling `2, 3, 4, 5, 6, 7, 2, 3, ...`. With `r = 11 - (sum mod 11)`:
//!
//! | `r`   | check |
//! |-------|-------|
//! | 11    | `0`   |
//! | 10    | `K`   |
//! | 1..=9 | digit |
//!
//! ## Normalization
//!
//! [`normalize`] drops every `.` and `-` and uppercases the rest. It never
//! fails; [`is_valid`] and [`Rut::new`] reject whatever it cannot fix.

use serde::{Deserialize, Serialize};

use crate::error::{RutError, ValidationError};

/// Weight sequence applied from the least significant digit upward.
const WEIGHTS: [u64; 6] = [2, 3, 4, 5, 6, 7];

/// Strip `.` and `-` separators and uppercase the result.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '.' | '-'))
        .collect::<String>()
        .to_uppercase()
}

/// Compute the check character for a digit-only RUT body.
///
/// The body must contain only ASCII digits, most significant first. That
/// precondition belongs to the caller ([`is_valid`] checks it before calling
/// this); a non-digit byte here contributes zero to the sum.
pub fn check_char(body: &str) -> char {
    let sum: u64 = body
        .bytes()
        .rev()
        .zip(WEIGHTS.iter().cycle())
        .map(|(b, w)| {
            let digit = if b.is_ascii_digit() { u64::from(b - b'0') } else { 0 };
            digit * w
        })
        .sum();

    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        // 1..=9
        r => char::from(b'0' + r as u8),
    }
}

/// Report whether `raw` is a well-formed RUT with a matching check character.
///
/// Formatting punctuation and case are ignored, so
/// `is_valid(s) == is_valid(&normalize(s))` for every `s`.
pub fn is_valid(raw: &str) -> bool {
    verify(&normalize(raw)).is_ok()
}

/// Run the structural and checksum checks on an already-normalized value.
fn verify(normalized: &str) -> Result<(), RutError> {
    let mut chars = normalized.chars();
    let supplied = match chars.next_back() {
        Some(c) if !chars.as_str().is_empty() => c,
        _ => return Err(RutError::TooShort),
    };
    let body = chars.as_str();

    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RutError::NonDigitBody);
    }

    let expected = check_char(body);
    if expected != supplied {
        return Err(RutError::CheckMismatch { expected, supplied });
    }
    Ok(())
}

/// A validated RUT, stored in normalized form (digits plus check character,
/// no separators, uppercase `K`).
///
/// Deserialization goes through [`Rut::new`], so a `Rut` read from JSON is
/// always valid. It serializes as the normalized string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rut(String);

impl Rut {
    /// Validate and normalize a RUT.
    ///
    /// Accepts `"76.543.210-3"`, `"76543210-3"`, `"765432103"` and lowercase
    /// `k` check characters alike.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRut`] when the normalized value is
    /// shorter than two characters, the body is not all digits, or the check
    /// character does not match.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = normalize(&raw);
        match verify(&normalized) {
            Ok(()) => Ok(Self(normalized)),
            Err(reason) => Err(ValidationError::InvalidRut { value: raw, reason }),
        }
    }

    /// The normalized value, e.g. `"765432103"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits preceding the check character.
    pub fn body(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    /// The check character (`0-9` or `K`).
    pub fn check(&self) -> char {
        // Validated non-empty ASCII at construction.
        char::from(self.0.as_bytes()[self.0.len() - 1])
    }

    /// Display form with thousands separators: `76.543.210-3`.
    pub fn formatted(&self) -> String {
        let body = self.body();
        let mut out = String::with_capacity(body.len() + body.len() / 3 + 2);
        for (i, c) in body.chars().enumerate() {
            if i > 0 && (body.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        out.push('-');
        out.push(self.check());
        out
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Rut {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Rut {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rut> for String {
    fn from(rut: Rut) -> Self {
        rut.0
    }
}
