//! Command handlers for the CLI.
//!
//! Handlers write to the sink they are given rather than stdout, so tests
//! can capture what a command prints.

mod completions;
mod list;
mod notes;
mod stats;


use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::cli::output::Output;
use crate::domain::Tag;

// Re-export public items
pub use completions::handle_completions;
pub use list::{handle_all, handle_list};
pub use notes::{handle_delete, handle_new, handle_show, handle_update};
pub use stats::handle_stats;

// ===========================================
// Shared Utilities
// ===========================================

/// Writes `data` as pretty JSON wrapped in an [`Output`] envelope.
pub(crate) fn write_json<T: Serialize>(out: &mut impl Write, data: T) -> Result<()> {
    let output = Output::new(data);
    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

/// Joins tags for display, or `-` when there are none.
pub(crate) fn format_tags(tags: &[Tag]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
