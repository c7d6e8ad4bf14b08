//! Shell completion script generation.

use anyhow::Result;
use clap::CommandFactory;
use std::io::Write;

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "jotbook", out);
    Ok(())
}
