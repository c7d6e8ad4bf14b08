//! CLI command definitions and handlers

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{NoteDraft, NoteId, Tag};
use output::OutputFormat;

pub use error::{CliError, exit_code};

/// jotbook - short tagged notes with word statistics
#[derive(Parser, Debug)]
#[command(name = "jotbook", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides the config file)
    #[arg(long, global = true, env = "JOTBOOK_DB")]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// Show a note
    Show(ShowArgs),

    /// Dump every note, unpaginated
    All(AllArgs),

    /// List notes page by page, newest first
    #[command(name = "ls")]
    List(ListArgs),

    /// Replace a note's title, text and tags
    Update(UpdateArgs),

    /// Delete a note
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Show word frequencies of a note's text
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Title, text and tags shared by `new` and `update`.
#[derive(clap::Args, Debug)]
pub struct DraftArgs {
    /// Note title
    #[arg(long)]
    pub title: String,

    /// Note text
    #[arg(long)]
    pub text: String,

    /// Tag (BUSINESS, PERSONAL or IMPORTANT; can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<Tag>,
}

impl DraftArgs {
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft::new(&self.title, &self.text, self.tags.clone())
    }
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub draft: DraftArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: NoteId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `all` command
#[derive(Parser, Debug)]
pub struct AllArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list notes carrying this tag
    #[arg(short, long)]
    pub tag: Option<Tag>,

    /// Page index, starting at 0
    #[arg(short, long, default_value_t = 0)]
    pub page: u32,

    /// Notes per page, 1 to 10 (default from config, else 5)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub size: Option<u32>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `update` command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Note ID
    pub id: NoteId,

    #[command(flatten)]
    pub draft: DraftArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID
    pub id: NoteId,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Note ID
    pub id: NoteId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
