//! NoteStore trait and error types.

use crate::domain::{NewNote, Note, NoteId, Page, PageRequest, Tag};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An update targeted a note the store does not hold.
    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for notes.
///
/// Each call is atomic with respect to a single note: a reader never sees
/// a half-written note, and once `delete_by_id` returns every later
/// `find_by_id` for that id yields `None`.
pub trait NoteStore {
    /// Persists a new note, assigning its id.
    fn insert(&mut self, note: NewNote) -> StoreResult<Note>;

    /// Overwrites an existing note's title, text and tags.
    ///
    /// Fails with `StoreError::NoteNotFound` if the id is unknown. The stored
    /// creation date is never changed.
    fn save(&mut self, note: &Note) -> StoreResult<Note>;

    /// Retrieves a single note by id.
    fn find_by_id(&self, id: &NoteId) -> StoreResult<Option<Note>>;

    /// Lists every note, in storage order.
    fn find_all(&self) -> StoreResult<Vec<Note>>;

    /// Returns one page of all notes.
    fn find_all_paged(&self, request: &PageRequest) -> StoreResult<Page<Note>>;

    /// Returns one page of the notes carrying `tag`.
    fn find_by_tag_paged(&self, tag: Tag, request: &PageRequest) -> StoreResult<Page<Note>>;

    /// Returns true if a note with this id exists.
    fn exists_by_id(&self, id: &NoteId) -> StoreResult<bool>;

    /// Removes a note by id (idempotent).
    fn delete_by_id(&mut self, id: &NoteId) -> StoreResult<()>;
}
