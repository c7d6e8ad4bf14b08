//! NoteStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Direction, NewNote, Note, NoteId, Page, PageRequest, SortField, Tag};
use crate::store::{NoteStore, StoreError, StoreResult};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;

const NOTE_COLUMNS: &str = "n.id, n.title, n.body, n.created";

/// Raw `notes` row before tags are attached.
struct NoteRow {
    id: String,
    title: String,
    body: String,
    created: String,
}

impl NoteRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            body: row.get(2)?,
            created: row.get(3)?,
        })
    }
}

/// Fixed-width UTC text, so lexical order matches chronological order.
pub(crate) fn encode_timestamp(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn decode_timestamp(s: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("invalid created timestamp '{}': {}", s, e)))
}

fn order_clause(request: &PageRequest) -> String {
    let sort = request.sort();
    let column = match sort.field {
        SortField::CreateDate => "n.created",
    };
    let direction = match sort.direction {
        Direction::Ascending => "ASC",
        Direction::Descending => "DESC",
    };
    // id breaks ties between equal timestamps
    format!("ORDER BY {column} {direction}, n.id {direction}")
}

/// SQLite integers are signed; clamp instead of wrapping.
fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl SqliteStore {
    fn load_tags(&self, note_id: &str) -> StoreResult<Vec<Tag>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT tag FROM note_tags WHERE note_id = ? ORDER BY position")?;
        let names = stmt
            .query_map([note_id], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        names
            .iter()
            .map(|name| {
                name.parse::<Tag>()
                    .map_err(|e| StoreError::Corrupt(e.to_string()))
            })
            .collect()
    }

    fn hydrate(&self, row: NoteRow) -> StoreResult<Note> {
        let id: NoteId = row
            .id
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("invalid note id in database: {}", e)))?;
        let created = decode_timestamp(&row.created)?;
        let tags = self.load_tags(&row.id)?;
        Ok(Note::new(id, row.title, row.body, created, tags))
    }

    fn query_notes(&self, sql: &str, params: impl rusqlite::Params) -> StoreResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, NoteRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(|row| self.hydrate(row)).collect()
    }

    fn count(&self, sql: &str, params: impl rusqlite::Params) -> StoreResult<u64> {
        let count: i64 = self.conn.query_row(sql, params, |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

impl NoteStore for SqliteStore {
    fn insert(&mut self, note: NewNote) -> StoreResult<Note> {
        let note = note.into_note(NoteId::new());
        let id_str = note.id().to_string();

        let tx = self.transaction()?;
        tx.execute(
            "INSERT INTO notes (id, title, body, created) VALUES (?1, ?2, ?3, ?4)",
            params![
                id_str,
                note.title(),
                note.text(),
                encode_timestamp(note.create_date())
            ],
        )?;
        for (position, tag) in note.tags().iter().enumerate() {
            tx.execute(
                "INSERT INTO note_tags (note_id, tag, position) VALUES (?1, ?2, ?3)",
                params![id_str, tag.as_str(), position as i64],
            )?;
        }
        tx.commit()?;

        debug!(id = %note.id(), "inserted note");
        Ok(note)
    }

    fn save(&mut self, note: &Note) -> StoreResult<Note> {
        let id_str = note.id().to_string();

        let tx = self.transaction()?;
        let changed = tx.execute(
            "UPDATE notes SET title = ?1, body = ?2 WHERE id = ?3",
            params![note.title(), note.text(), id_str],
        )?;
        if changed == 0 {
            // dropping the transaction rolls it back
            return Err(StoreError::NoteNotFound { id: id_str });
        }
        tx.execute("DELETE FROM note_tags WHERE note_id = ?", [&id_str])?;
        for (position, tag) in note.tags().iter().enumerate() {
            tx.execute(
                "INSERT INTO note_tags (note_id, tag, position) VALUES (?1, ?2, ?3)",
                params![id_str, tag.as_str(), position as i64],
            )?;
        }
        tx.commit()?;

        debug!(id = %note.id(), "saved note");
        self.find_by_id(note.id())?
            .ok_or(StoreError::NoteNotFound { id: id_str })
    }

    fn find_by_id(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes n WHERE n.id = ?"),
                [id.to_string()],
                NoteRow::from_row,
            )
            .optional()?;

        row.map(|row| self.hydrate(row)).transpose()
    }

    fn find_all(&self) -> StoreResult<Vec<Note>> {
        self.query_notes(
            &format!("SELECT {NOTE_COLUMNS} FROM notes n ORDER BY n.rowid"),
            [],
        )
    }

    fn find_all_paged(&self, request: &PageRequest) -> StoreResult<Page<Note>> {
        debug!(page = request.page(), size = request.size(), "paged query");

        let total = self.count("SELECT COUNT(*) FROM notes", [])?;
        let content = self.query_notes(
            &format!(
                "SELECT {NOTE_COLUMNS} FROM notes n {} LIMIT ?1 OFFSET ?2",
                order_clause(request)
            ),
            params![i64::from(request.size()), to_sql_int(request.offset())],
        )?;

        Ok(Page::new(content, request, total))
    }

    fn find_by_tag_paged(&self, tag: Tag, request: &PageRequest) -> StoreResult<Page<Note>> {
        debug!(%tag, page = request.page(), size = request.size(), "paged query by tag");

        let total = self.count(
            "SELECT COUNT(*) FROM note_tags WHERE tag = ?",
            [tag.as_str()],
        )?;
        let content = self.query_notes(
            &format!(
                "SELECT {NOTE_COLUMNS} FROM notes n
                 JOIN note_tags nt ON nt.note_id = n.id
                 WHERE nt.tag = ?1
                 {} LIMIT ?2 OFFSET ?3",
                order_clause(request)
            ),
            params![
                tag.as_str(),
                i64::from(request.size()),
                to_sql_int(request.offset())
            ],
        )?;

        Ok(Page::new(content, request, total))
    }

    fn exists_by_id(&self, id: &NoteId) -> StoreResult<bool> {
        Ok(self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM notes WHERE id = ?)",
            [id.to_string()],
            |row| row.get(0),
        )?)
    }

    fn delete_by_id(&mut self, id: &NoteId) -> StoreResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?", [id.to_string()])?;
        debug!(%id, removed, "delete by id");
        Ok(())
    }
}
