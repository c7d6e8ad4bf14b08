//! Fluent wrapper around assert_cmd::Command.

// Not every test binary uses every helper
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `jotbook` binary.
pub struct JotCommand {
    args: Vec<String>,
    config: Option<PathBuf>,
}

impl JotCommand {
    /// Creates a new command for the `jotbook` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config: None,
        }
    }

    /// Sets the `--db` option.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `JOTBOOK_CONFIG` at `path`.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jotbook").expect("Failed to find jotbook binary");
        cmd.env_remove("JOTBOOK_DB")
            .env_remove("JOTBOOK_LOG")
            .env_remove("RUST_LOG");
        if let Some(config) = &self.config {
            cmd.env("JOTBOOK_CONFIG", config);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `new` command.
    pub fn new_note(self, title: &str, text: &str) -> Self {
        self.args(["new", "--title", title, "--text", text])
    }

    /// Configures for the `show` command with an ID.
    pub fn show(self, id: &str) -> Self {
        self.args(["show", id])
    }

    /// Configures for the `all` command.
    pub fn all(self) -> Self {
        self.args(["all"])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `update` command.
    pub fn update(self, id: &str, title: &str, text: &str) -> Self {
        self.args(["update", id, "--title", title, "--text", text])
    }

    /// Configures for the `rm` command.
    pub fn rm(self, id: &str) -> Self {
        self.args(["rm", id])
    }

    /// Configures for the `stats` command.
    pub fn stats(self, id: &str) -> Self {
        self.args(["stats", id])
    }

    /// Adds a `--tag` option.
    pub fn tag(self, tag: &str) -> Self {
        self.args(["--tag", tag])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for JotCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        JotCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_db() {
        let cmd = JotCommand::new().db(Path::new("/tmp/notes.db"));
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], "/tmp/notes.db");
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = JotCommand::new().ls().tag("business").format_json();
        let args = cmd.get_args();
        assert_eq!(args, ["ls", "--tag", "business", "--format", "json"]);
    }
}
