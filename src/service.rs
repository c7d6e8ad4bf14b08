//! Note query service: CRUD orchestration, paged listings and word stats.

use crate::domain::{Note, NoteDraft, NoteId, NoteSummary, Page, PageRequest, Sort, Tag};
use crate::stats::{WordFrequencyTable, frequencies};
use crate::store::{NoteStore, StoreResult};
use chrono::Utc;
use tracing::{debug, info};

/// Front door for note operations.
///
/// The service owns its store and keeps no other state. It trusts its
/// input: drafts are validated by the caller. Absence is reported as `None`
/// (or `false` for delete); store failures propagate unchanged.
///
/// # Examples
///
/// ```
/// use jotbook::domain::{NoteDraft, Tag};
/// use jotbook::service::NoteService;
/// use jotbook::store::SqliteStore;
///
/// # fn main() -> anyhow::Result<()> {
/// let mut service = NoteService::new(SqliteStore::open_in_memory()?);
/// let note = service.create(NoteDraft::new("Hello", "hello world", vec![Tag::Personal]))?;
///
/// let page = service.list(Some(Tag::Personal), 0, 5)?;
/// assert_eq!(page.total_elements(), 1);
/// assert_eq!(page.content()[0].id(), note.id());
/// # Ok(())
/// # }
/// ```
pub struct NoteService<S> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stamps the draft with the current time and persists it.
    pub fn create(&mut self, draft: NoteDraft) -> StoreResult<Note> {
        let note = self.store.insert(draft.stamp(Utc::now()))?;
        info!(id = %note.id(), "created note");
        Ok(note)
    }

    pub fn get_by_id(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        self.store.find_by_id(id)
    }

    /// Every note, unpaginated and in storage order. Meant for diagnostics.
    pub fn list_all(&self) -> StoreResult<Vec<Note>> {
        self.store.find_all()
    }

    /// One page of note summaries, newest first, optionally limited to `tag`.
    ///
    /// `size` must be positive; range checks belong to the caller.
    pub fn list(&self, tag: Option<Tag>, page: u32, size: u32) -> StoreResult<Page<NoteSummary>> {
        let request = PageRequest::new(page, size, Sort::newest_first());
        debug!(?tag, page, size, "listing notes");

        let notes = match tag {
            Some(tag) => self.store.find_by_tag_paged(tag, &request)?,
            None => self.store.find_all_paged(&request)?,
        };
        Ok(notes.map(NoteSummary::from))
    }

    /// Replaces title, text and tags of an existing note.
    ///
    /// Returns `None` without writing anything if the note does not exist.
    pub fn update(&mut self, id: &NoteId, patch: NoteDraft) -> StoreResult<Option<Note>> {
        let Some(current) = self.store.find_by_id(id)? else {
            debug!(%id, "update of missing note");
            return Ok(None);
        };

        let saved = self.store.save(&current.with_draft(patch))?;
        info!(%id, "updated note");
        Ok(Some(saved))
    }

    /// Deletes a note, returning whether it existed.
    pub fn delete(&mut self, id: &NoteId) -> StoreResult<bool> {
        if !self.store.exists_by_id(id)? {
            debug!(%id, "delete of missing note");
            return Ok(false);
        }

        self.store.delete_by_id(id)?;
        info!(%id, "deleted note");
        Ok(true)
    }

    /// Word frequencies of a note's text.
    pub fn stats_for(&self, id: &NoteId) -> StoreResult<Option<WordFrequencyTable>> {
        Ok(self
            .store
            .find_by_id(id)?
            .map(|note| frequencies(note.text())))
    }
}
