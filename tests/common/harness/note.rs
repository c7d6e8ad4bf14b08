//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Utc};
use jotbook::domain::{NewNote, NoteDraft, Tag};

/// Builder for creating test notes with sensible defaults.
///
/// The creation date defaults to now; set it explicitly when a test
/// depends on listing order.
#[derive(Debug)]
pub struct TestNote {
    title: String,
    text: String,
    tags: Vec<Tag>,
    created: DateTime<Utc>,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: "placeholder text".to_string(),
            tags: Vec::new(),
            created: Utc::now(),
        }
    }

    /// Sets the note text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.push(tag.as_ref().parse().expect("Invalid tag"));
        self
    }

    /// Sets the creation date from an RFC 3339 string.
    pub fn created(mut self, rfc3339: &str) -> Self {
        self.created = DateTime::parse_from_rfc3339(rfc3339)
            .expect("Invalid timestamp")
            .with_timezone(&Utc);
        self
    }

    /// Converts to the value the store inserts.
    pub fn to_new_note(&self) -> NewNote {
        NoteDraft::new(&self.title, &self.text, self.tags.clone()).stamp(self.created)
    }
}
