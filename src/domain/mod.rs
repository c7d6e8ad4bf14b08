//! Core types: Note, NoteDraft, NoteSummary, Tag, NoteId (ULID), Page

mod note;
mod note_id;
mod page;
mod tag;
mod validation;

pub use note::{NewNote, Note, NoteDraft, NoteSummary};
pub use note_id::{NoteId, ParseNoteIdError};
pub use page::{Direction, Page, PageRequest, Sort, SortField};
pub use tag::{ParseTagError, Tag};
pub use validation::{FieldIssue, MAX_TAGS, MAX_TEXT_CHARS, MAX_TITLE_CHARS, ValidationError};
