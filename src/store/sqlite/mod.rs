//! SQLite-backed note store.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

/// SQLite-backed note store.
///
/// Owns the database connection. Open it on a file with [`SqliteStore::open`]
/// or in memory with [`SqliteStore::open_in_memory`].
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
