//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Page size used when neither `--size` nor the config file sets one.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Largest page size a listing may request.
pub const MAX_PAGE_SIZE: u32 = 10;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file
    pub database: Option<PathBuf>,

    /// Default number of notes per `ls` page
    pub page_size: Option<u32>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// `JOTBOOK_CONFIG` overrides the location. Returns default config if
    /// the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var_os("JOTBOOK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_path);
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if let Some(size) = config.page_size
            && !(1..=MAX_PAGE_SIZE).contains(&size)
        {
            bail!("page_size must be between 1 and {MAX_PAGE_SIZE}, got {size}");
        }
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jotbook/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jotbook")
            .join("config.toml")
    }

    /// Resolve the database file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `notes.db` in the platform data directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("jotbook")
                    .join("notes.db")
            })
    }

    /// Resolve the page size for `ls`, with CLI argument taking precedence.
    pub fn page_size(&self, cli_size: Option<u32>) -> u32 {
        cli_size
            .or(self.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
