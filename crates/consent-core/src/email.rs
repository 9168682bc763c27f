//! # Email Shape Check
//!
//! Deliberately shallow: one `@`, something on each side, a dot in the
//! domain with something after it, and no whitespace anywhere. Deliverability
//! is not checked.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Return `true` if `email` has the basic `local@domain.tld` shape.
///
/// The caller is expected to have trimmed surrounding whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("ana@empresa.cl"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("@empresa.cl"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana@empresa"));
        assert!(!is_valid_email("ana@empresa."));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("ana maria@empresa.cl"));
        assert!(!is_valid_email(" ana@empresa.cl"));
        assert!(!is_valid_email("ana@@empresa.cl"));
        assert!(!is_valid_email("ana@emp@resa.cl"));
    }

    #[test]
    fn accepts_non_ascii_characters() {
        assert!(is_valid_email("josé@señal.cl"));
    }
}
