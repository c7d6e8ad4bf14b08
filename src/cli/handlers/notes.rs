//! Single-note command handlers: new, show, update and rm.

use anyhow::{Context, Result};
use std::io::Write;

use super::{format_tags, write_json};
use crate::cli::output::OutputFormat;
use crate::cli::{CliError, DeleteArgs, NewArgs, ShowArgs, UpdateArgs};
use crate::domain::Note;
use crate::service::NoteService;
use crate::store::NoteStore;

pub fn handle_new<S: NoteStore>(
    args: &NewArgs,
    service: &mut NoteService<S>,
    out: &mut impl Write,
) -> Result<()> {
    let draft = args.draft.to_draft();
    draft.validate().map_err(CliError::from)?;

    let note = service
        .create(draft)
        .with_context(|| "failed to create note")?;

    match args.format {
        OutputFormat::Human => writeln!(out, "Created: {note}")?,
        OutputFormat::Json => write_json(out, &note)?,
    }
    Ok(())
}

pub fn handle_show<S: NoteStore>(
    args: &ShowArgs,
    service: &NoteService<S>,
    out: &mut impl Write,
) -> Result<()> {
    let note = service
        .get_by_id(&args.id)
        .with_context(|| format!("failed to load note {}", args.id))?
        .ok_or_else(|| CliError::NotFound {
            id: args.id.clone(),
        })?;

    match args.format {
        OutputFormat::Human => write_note(out, &note)?,
        OutputFormat::Json => write_json(out, &note)?,
    }
    Ok(())
}

pub fn handle_update<S: NoteStore>(
    args: &UpdateArgs,
    service: &mut NoteService<S>,
    out: &mut impl Write,
) -> Result<()> {
    let draft = args.draft.to_draft();
    draft.validate().map_err(CliError::from)?;

    let note = service
        .update(&args.id, draft)
        .with_context(|| format!("failed to update note {}", args.id))?
        .ok_or_else(|| CliError::NotFound {
            id: args.id.clone(),
        })?;

    match args.format {
        OutputFormat::Human => writeln!(out, "Updated: {note}")?,
        OutputFormat::Json => write_json(out, &note)?,
    }
    Ok(())
}

pub fn handle_delete<S: NoteStore>(
    args: &DeleteArgs,
    service: &mut NoteService<S>,
    out: &mut impl Write,
) -> Result<()> {
    let deleted = service
        .delete(&args.id)
        .with_context(|| format!("failed to delete note {}", args.id))?;

    if !deleted {
        return Err(CliError::NotFound {
            id: args.id.clone(),
        }
        .into());
    }

    writeln!(out, "Deleted: {}", args.id)?;
    Ok(())
}

fn write_note(out: &mut impl Write, note: &Note) -> Result<()> {
    writeln!(out, "ID:      {}", note.id())?;
    writeln!(out, "Title:   {}", note.title())?;
    writeln!(
        out,
        "Created: {}",
        note.create_date().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "Tags:    {}", format_tags(note.tags()))?;
    writeln!(out)?;
    writeln!(out, "{}", note.text())?;
    Ok(())
}
