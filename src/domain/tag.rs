//! Closed set of note categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category label attachable to a note.
///
/// The set is closed: a note can only carry the variants below. Tags display
/// and serialize in upper case and parse case-insensitively, so `business`,
/// `Business` and `BUSINESS` all name the same tag.
///
/// # Examples
///
/// ```
/// use jotbook::domain::Tag;
///
/// let tag: Tag = "personal".parse().unwrap();
/// assert_eq!(tag, Tag::Personal);
/// assert_eq!(tag.as_str(), "PERSONAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Business,
    Personal,
    Important,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 3] = [Tag::Business, Tag::Personal, Tag::Important];

    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Business => "BUSINESS",
            Tag::Personal => "PERSONAL",
            Tag::Important => "IMPORTANT",
        }
    }
}

/// Error returned when parsing a name outside the tag set.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let allowed: Vec<&str> = Tag::ALL.iter().map(Tag::as_str).collect();
        write!(
            f,
            "invalid tag '{}': must be one of {}",
            self.0,
            allowed.join(", ")
        )
    }
}

impl std::error::Error for ParseTagError {}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTagError(trimmed.to_string()))
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
