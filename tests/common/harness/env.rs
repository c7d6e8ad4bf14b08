//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use jotbook::domain::{Note, NoteId};
use jotbook::store::{NoteStore, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with its own database and config file.
///
/// Everything lives in a temp directory that is removed on drop. The
/// config file does not exist until [`TestEnv::write_config`] is called.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the environment's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("notes.db")
    }

    /// Returns the path the binary reads its config from.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the config file.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Inserts a note straight into the database and returns it.
    pub fn add_note(&self, test_note: &TestNote) -> Note {
        let mut store = SqliteStore::open(&self.db_path()).expect("Failed to open store");
        store
            .insert(test_note.to_new_note())
            .expect("Failed to insert test note")
    }

    /// Reads a note straight from the database.
    pub fn find_note(&self, id: &NoteId) -> Option<Note> {
        let store = SqliteStore::open(&self.db_path()).expect("Failed to open store");
        store.find_by_id(id).expect("Failed to read note")
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .db(&self.db_path())
            .config(&self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_creates_database() {
        let env = TestEnv::new();
        let note = env.add_note(&TestNote::new("Seeded").tag("business"));

        assert!(env.db_path().exists());
        let found = env.find_note(note.id()).expect("note should be stored");
        assert_eq!(found.title(), "Seeded");
    }

    #[test]
    fn test_env_config_not_written_by_default() {
        let env = TestEnv::new();
        assert!(!env.config_path().exists());
        env.write_config("page_size = 2\n");
        assert!(env.config_path().exists());
    }
}
