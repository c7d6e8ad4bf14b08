//! Note values: the in-flight draft, the persisted note and its list projection.

use crate::domain::{NoteId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The user-editable part of a note.
///
/// A draft has no id and no creation date; it is the input of create and
/// the patch applied by update. Tags are kept exactly as given so that
/// boundary validation can see the raw count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    title: String,
    text: String,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            tags,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Stamps the draft with its creation date, ready for insertion.
    pub fn stamp(self, create_date: DateTime<Utc>) -> NewNote {
        NewNote {
            draft: self,
            create_date,
        }
    }
}

/// A draft stamped with its creation date but not yet given an id.
///
/// Only the store turns a `NewNote` into a [`Note`], by assigning the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    draft: NoteDraft,
    create_date: DateTime<Utc>,
}

impl NewNote {
    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    /// Attaches the store-assigned id.
    pub fn into_note(self, id: NoteId) -> Note {
        let NoteDraft { title, text, tags } = self.draft;
        Note::new(id, title, text, self.create_date, tags)
    }
}

/// A persisted note.
///
/// A `Note` always has an id and a creation date. Neither changes over the
/// note's lifetime: [`Note::with_draft`] produces the updated value and
/// carries both over. Duplicate tags are dropped, keeping the first
/// occurrence.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    text: String,
    create_date: DateTime<Utc>,
    tags: Vec<Tag>,
}

impl Note {
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        text: impl Into<String>,
        create_date: DateTime<Utc>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            create_date,
            tags: deduplicate_tags(tags),
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the note was created.
    pub fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    /// Returns the note's tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns true if the note carries `tag`.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Builds the note that results from applying `patch` to this one.
    ///
    /// Title, text and tags come from the patch; id and creation date are
    /// kept. `self` is left untouched.
    pub fn with_draft(&self, patch: NoteDraft) -> Note {
        let NoteDraft { title, text, tags } = patch;
        Note::new(self.id.clone(), title, text, self.create_date, tags)
    }

    /// Projects the note to its list view.
    pub fn summary(&self) -> NoteSummary {
        NoteSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            create_date: self.create_date,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.short())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("create_date", &self.create_date)
            .field("tags", &self.tags)
            .field("text_len", &self.text.chars().count())
            .finish()
    }
}

impl From<Note> for NoteSummary {
    fn from(note: Note) -> Self {
        NoteSummary {
            id: note.id,
            title: note.title,
            create_date: note.create_date,
        }
    }
}

/// List view of a note: text and tags are left out to keep listings small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummary {
    id: NoteId,
    title: String,
    create_date: DateTime<Utc>,
}

impl NoteSummary {
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }
}

/// Removes duplicate tags (first occurrence kept).
fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}
