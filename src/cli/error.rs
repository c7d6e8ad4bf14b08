//! Boundary outcomes that map to distinct exit statuses.

use crate::domain::{NoteId, ValidationError};
use std::process::ExitCode;
use thiserror::Error;

/// Exit status when the requested note does not exist.
pub const EXIT_NOT_FOUND: u8 = 4;

/// Exit status when input fails validation.
pub const EXIT_INVALID: u8 = 3;

/// Non-success outcomes a handler reports on purpose.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Picks the process exit status for an error returned by [`crate::run`].
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<CliError>() {
        Some(CliError::NotFound { .. }) => ExitCode::from(EXIT_NOT_FOUND),
        Some(CliError::Invalid(_)) => ExitCode::from(EXIT_INVALID),
        None => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteDraft;

    #[test]
    fn not_found_names_the_id() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let err = CliError::NotFound { id };
        assert_eq!(err.to_string(), "note not found: 01HQ3K5M7NXJK4QZPW8V2R6T9Y");
    }

    #[test]
    fn invalid_is_transparent() {
        let validation = NoteDraft::new("", "x", vec![]).validate().unwrap_err();
        let err = CliError::from(validation.clone());
        assert_eq!(err.to_string(), validation.to_string());
    }

    #[test]
    fn exit_codes_distinguish_outcomes() {
        let not_found = anyhow::Error::new(CliError::NotFound { id: NoteId::new() });
        let invalid = anyhow::Error::new(CliError::Invalid(
            NoteDraft::new("", "", vec![]).validate().unwrap_err(),
        ));
        let other = anyhow::anyhow!("disk on fire");

        assert_eq!(exit_code(&not_found), ExitCode::from(EXIT_NOT_FOUND));
        assert_eq!(exit_code(&invalid), ExitCode::from(EXIT_INVALID));
        assert_eq!(exit_code(&other), ExitCode::FAILURE);
    }

    #[test]
    fn exit_code_sees_through_context() {
        let err = anyhow::Error::new(CliError::NotFound { id: NoteId::new() })
            .context("while showing note");
        assert_eq!(exit_code(&err), ExitCode::from(EXIT_NOT_FOUND));
    }
}
