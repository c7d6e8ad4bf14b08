//! SQLite schema creation for the note store.

use rusqlite::Connection;

/// Current schema version recorded in `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema for the note store.
///
/// Idempotent: calling it on an existing database is a no-op.
///
/// # Tables Created
/// - `notes` - one row per note
/// - `note_tags` - tags per note, with their position on the note
/// - `schema_version` - schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    // `created` holds fixed-width RFC 3339 UTC text so it sorts chronologically
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            created TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS note_tags (
            note_id TEXT NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            tag TEXT NOT NULL CHECK (tag IN ('BUSINESS', 'PERSONAL', 'IMPORTANT')),
            position INTEGER NOT NULL,
            PRIMARY KEY (note_id, tag)
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_notes_created ON notes(created);
         CREATE INDEX IF NOT EXISTS idx_note_tags_tag ON note_tags(tag);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}
