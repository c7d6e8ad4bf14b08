//! jotbook - short tagged notes with word statistics

pub mod cli;
pub mod domain;
pub mod service;
pub mod stats;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_all, handle_completions, handle_delete, handle_list, handle_new, handle_show,
        handle_stats, handle_update,
    },
    logging,
};
use service::NoteService;
use store::SqliteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // completions need neither config nor database
    if let Command::Completions(args) = &cli.command {
        return handle_completions(args, &mut out);
    }

    let config = Config::load()?;
    let db_path = config.database_path(cli.db.as_ref());

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    let mut service = NoteService::new(store);

    match &cli.command {
        Command::New(args) => handle_new(args, &mut service, &mut out),
        Command::Show(args) => handle_show(args, &service, &mut out),
        Command::All(args) => handle_all(args, &service, &mut out),
        Command::List(args) => handle_list(args, &service, &config, &mut out),
        Command::Update(args) => handle_update(args, &mut service, &mut out),
        Command::Delete(args) => handle_delete(args, &mut service, &mut out),
        Command::Stats(args) => handle_stats(args, &service, &mut out),
        Command::Completions(args) => handle_completions(args, &mut out),
    }
}
