//! Listing command handlers: paged `ls` and the unpaginated `all` dump.

use anyhow::{Context, Result};
use std::io::Write;

use super::{format_tags, truncate_str, write_json};
use crate::cli::config::Config;
use crate::cli::output::OutputFormat;
use crate::cli::{AllArgs, ListArgs};
use crate::service::NoteService;
use crate::store::NoteStore;

const TITLE_WIDTH: usize = 40;

pub fn handle_list<S: NoteStore>(
    args: &ListArgs,
    service: &NoteService<S>,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let size = config.page_size(args.size);
    let page = service
        .list(args.tag, args.page, size)
        .with_context(|| "failed to list notes")?;

    match args.format {
        OutputFormat::Human => {
            if page.is_empty() {
                writeln!(out, "No notes found.")?;
            } else {
                writeln!(out, "{:<10}  {:<40}  {:>16}", "ID", "Title", "Created")?;
                writeln!(
                    out,
                    "{:<10}  {:<40}  {:>16}",
                    "----------",
                    "----------------------------------------",
                    "----------------"
                )?;

                for summary in page.content() {
                    let created = summary.create_date().format("%Y-%m-%d %H:%M");
                    writeln!(
                        out,
                        "{:<10}  {:<40}  {:>16}",
                        summary.id().short(),
                        truncate_str(summary.title(), TITLE_WIDTH),
                        created.to_string()
                    )?;
                }
            }

            if page.total_elements() > 0 {
                writeln!(out)?;
                writeln!(
                    out,
                    "Page {} of {} ({} notes)",
                    u64::from(page.page()) + 1,
                    page.total_pages(),
                    page.total_elements()
                )?;
            }
        }
        OutputFormat::Json => write_json(out, &page)?,
    }

    Ok(())
}

pub fn handle_all<S: NoteStore>(
    args: &AllArgs,
    service: &NoteService<S>,
    out: &mut impl Write,
) -> Result<()> {
    let notes = service
        .list_all()
        .with_context(|| "failed to list all notes")?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                writeln!(out, "No notes found.")?;
                return Ok(());
            }

            writeln!(out, "{:<26}  {:<40}  Tags", "ID", "Title")?;
            for note in &notes {
                writeln!(
                    out,
                    "{:<26}  {:<40}  {}",
                    note.id().to_string(),
                    truncate_str(note.title(), TITLE_WIDTH),
                    format_tags(note.tags())
                )?;
            }
            writeln!(out)?;
            writeln!(out, "{} note(s)", notes.len())?;
        }
        OutputFormat::Json => write_json(out, &notes)?,
    }

    Ok(())
}
