//! Stats command handler.

use anyhow::{Context, Result};
use std::io::Write;

use super::write_json;
use crate::cli::output::OutputFormat;
use crate::cli::{CliError, StatsArgs};
use crate::service::NoteService;
use crate::store::NoteStore;

pub fn handle_stats<S: NoteStore>(
    args: &StatsArgs,
    service: &NoteService<S>,
    out: &mut impl Write,
) -> Result<()> {
    let table = service
        .stats_for(&args.id)
        .with_context(|| format!("failed to compute stats for note {}", args.id))?
        .ok_or_else(|| CliError::NotFound {
            id: args.id.clone(),
        })?;

    match args.format {
        OutputFormat::Human => {
            if table.is_empty() {
                writeln!(out, "No words.")?;
                return Ok(());
            }

            let width = table
                .iter()
                .map(|(word, _)| word.chars().count())
                .max()
                .unwrap_or(0);
            for (word, count) in table.iter() {
                writeln!(out, "{word:<width$}  {count:>5}")?;
            }
        }
        OutputFormat::Json => write_json(out, &table)?,
    }

    Ok(())
}
