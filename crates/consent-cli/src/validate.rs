//! # Validate Subcommand
//!
//! Runs the consent submission checks against JSON files on disk, in the
//! same order the API applies them. Useful for replaying a payload captured
//! from a bug report without going through HTTP.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use consent_core::{ConsentSubmission, SubmissionError, ValidatedSubmission};

/// Arguments for the `consent validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Submission files (JSON objects with the consent form fields).
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every file passes, 1 if any fails.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut failed = 0usize;

    for path in &args.paths {
        match validate_file(path)? {
            Ok(valid) => println!(
                "OK   {}: RUT {}",
                path.display(),
                valid.rut_empresa.formatted()
            ),
            Err(e) => {
                failed += 1;
                println!("FAIL {}: {e}", path.display());
            }
        }
    }

    tracing::info!(total = args.paths.len(), failed, "validation finished");
    Ok(u8::from(failed > 0))
}

/// Read, parse and validate one submission file.
///
/// The outer `Result` carries I/O and JSON errors; the inner one carries
/// the user-facing validation outcome.
pub fn validate_file(path: &Path) -> Result<Result<ValidatedSubmission, SubmissionError>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let submission: ConsentSubmission = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a consent submission object", path.display()))?;
    tracing::debug!(path = %path.display(), "parsed submission");
    Ok(submission.validate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn valid_file_passes() {
        let file = write_temp(
            r#"{"nombre":"Ana","rutEmpresa":"76.543.210-3","email":"ana@empresa.cl","aceptaTerminos":true}"#,
        );
        let valid = validate_file(file.path()).unwrap().unwrap();
        assert_eq!(valid.rut_empresa.as_str(), "765432103");
        assert_eq!(valid.nombre, "Ana");
    }

    #[test]
    fn rejected_file_reports_first_failure() {
        let file = write_temp(r#"{"nombre":"Ana","email":"bad","aceptaTerminos":true}"#);
        let outcome = validate_file(file.path()).unwrap();
        assert_eq!(outcome.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn array_file_is_an_empty_form() {
        let file = write_temp(r#"["Ana","76.543.210-3","a@b.cl",true]"#);
        let outcome = validate_file(file.path()).unwrap();
        assert_eq!(outcome.unwrap_err(), SubmissionError::TermsNotAccepted);
    }

    #[test]
    fn string_terms_flag_counts_as_accepted() {
        let file = write_temp(
            r#"{"nombre":"Ana","rutEmpresa":"76543210-3","email":"a@b.cl","aceptaTerminos":"true"}"#,
        );
        assert!(validate_file(file.path()).unwrap().is_ok());
    }

    #[test]
    fn malformed_json_is_operational_error() {
        let file = write_temp("{nope");
        let err = validate_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("not a consent submission"));
    }

    #[test]
    fn missing_file_is_operational_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }

    #[test]
    fn run_validate_exit_codes() {
        let good = write_temp(
            r#"{"nombre":"Ana","rutEmpresa":"60803000-K","email":"a@b.cl","aceptaTerminos":true}"#,
        );
        let bad = write_temp(r#"{"aceptaTerminos":false}"#);

        let all_good = ValidateArgs {
            paths: vec![good.path().to_path_buf()],
        };
        assert_eq!(run_validate(&all_good).unwrap(), 0);

        let mixed = ValidateArgs {
            paths: vec![good.path().to_path_buf(), bad.path().to_path_buf()],
        };
        assert_eq!(run_validate(&mixed).unwrap(), 1);
    }
}
