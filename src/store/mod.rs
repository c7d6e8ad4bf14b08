//! Note persistence: the NoteStore contract and its SQLite implementation

mod repository;
mod schema;
mod sqlite;

pub use repository::{NoteStore, StoreError, StoreResult};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use sqlite::{SqliteStore, Transaction};
