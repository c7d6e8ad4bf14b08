//! Field validation for drafts arriving at the boundary.
//!
//! The query service trusts its input; callers run [`NoteDraft::validate`]
//! before handing a draft over.

use crate::domain::NoteDraft;
use std::fmt;
use thiserror::Error;

/// Maximum title length, in characters.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum body length, in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Maximum number of tags on a note.
pub const MAX_TAGS: usize = 3;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Malformed input, with one entry per offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid note: {}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Returns the message for `field`, if that field was rejected.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl NoteDraft {
    /// Checks the draft against the note field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every field that is:
    /// - a blank title or text
    /// - a title over 200 characters or a text over 5000 characters
    /// - more than 3 tags
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.title().trim().is_empty() {
            issues.push(FieldIssue {
                field: "title",
                message: "Title cannot be empty",
            });
        } else if self.title().chars().count() > MAX_TITLE_CHARS {
            issues.push(FieldIssue {
                field: "title",
                message: "Title cannot exceed 200 characters",
            });
        }

        if self.text().trim().is_empty() {
            issues.push(FieldIssue {
                field: "text",
                message: "Text cannot be empty",
            });
        } else if self.text().chars().count() > MAX_TEXT_CHARS {
            issues.push(FieldIssue {
                field: "text",
                message: "Text cannot exceed 5000 characters",
            });
        }

        if self.tags().len() > MAX_TAGS {
            issues.push(FieldIssue {
                field: "tags",
                message: "Cannot have more than 3 tags",
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}
