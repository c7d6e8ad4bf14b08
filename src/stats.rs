//! Word-frequency statistics over note bodies.
//!
//! Text is lowercased, every character that is neither a letter nor
//! whitespace is dropped (so `one-two` collapses to `onetwo`), and what
//! remains is split on whitespace. Counts are ordered by descending
//! frequency; equal counts keep the order in which the words first appear.

use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::sync::LazyLock;

static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\s]+").expect("pattern is valid"));

/// Lowercases `text` and strips everything that is not a letter or whitespace.
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize(text: &str) -> String {
    NON_WORD_CHARS
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

/// Splits normalized `text` into its non-empty tokens, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Counts word occurrences in `text`.
///
/// # Examples
///
/// ```
/// use jotbook::stats::frequencies;
///
/// let table = frequencies("note is just a note, note!");
/// let words: Vec<_> = table.iter().collect();
/// assert_eq!(words, vec![("note", 3), ("is", 1), ("just", 1), ("a", 1)]);
/// ```
pub fn frequencies(text: &str) -> WordFrequencyTable {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<(String, u64)> = Vec::new();

    for token in tokenize(text) {
        match positions.get(&token) {
            Some(&index) => entries[index].1 += 1,
            None => {
                positions.insert(token.clone(), entries.len());
                entries.push((token, 1));
            }
        }
    }

    // entries are in first-occurrence order; a stable sort keeps it for ties
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    WordFrequencyTable { entries }
}

/// Ordered word → count table, most frequent first.
///
/// Serializes as a map whose keys keep the table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    entries: Vec<(String, u64)>,
}

impl WordFrequencyTable {
    /// Iterates `(word, count)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    /// Returns the count for `word`, if it occurs.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens in the source text.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn into_vec(self) -> Vec<(String, u64)> {
        self.entries
    }
}

impl Serialize for WordFrequencyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(table: &WordFrequencyTable) -> Vec<(&str, u64)> {
        table.iter().collect()
    }

    #[test]
    fn counts_and_orders_repeated_word_first() {
        let table = frequencies("note is just a note, note!");
        assert_eq!(
            pairs(&table),
            vec![("note", 3), ("is", 1), ("just", 1), ("a", 1)]
        );
    }

    #[test]
    fn empty_text_yields_empty_table() {
        assert!(frequencies("").is_empty());
    }

    #[test]
    fn whitespace_only_text_yields_empty_table() {
        assert!(frequencies("  \n\t  ").is_empty());
    }

    #[test]
    fn punctuation_only_text_yields_empty_table() {
        assert!(frequencies("!!! --- 42").is_empty());
    }

    #[test]
    fn hyphen_is_removed_not_split_on() {
        let table = frequencies("one-two three");
        assert_eq!(pairs(&table), vec![("onetwo", 1), ("three", 1)]);
    }

    #[test]
    fn digits_are_stripped_inside_words() {
        let table = frequencies("abc123def r2d2");
        assert_eq!(pairs(&table), vec![("abcdef", 1), ("rd", 1)]);
    }

    #[test]
    fn case_is_folded() {
        let table = frequencies("Rust RUST rust");
        assert_eq!(pairs(&table), vec![("rust", 3)]);
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let table = frequencies("b a c a b c d");
        assert_eq!(
            pairs(&table),
            vec![("b", 2), ("a", 2), ("c", 2), ("d", 1)]
        );
    }

    #[test]
    fn higher_count_beats_earlier_occurrence() {
        let table = frequencies("alpha beta beta gamma gamma gamma");
        assert_eq!(
            pairs(&table),
            vec![("gamma", 3), ("beta", 2), ("alpha", 1)]
        );
    }

    #[test]
    fn non_ascii_letters_are_kept() {
        let table = frequencies("Ünïcode café CAFÉ, naïve");
        assert_eq!(
            pairs(&table),
            vec![("café", 2), ("ünïcode", 1), ("naïve", 1)]
        );
    }

    #[test]
    fn mixed_whitespace_separates_tokens() {
        let table = frequencies("one\ttwo\n\nthree  one");
        assert_eq!(
            pairs(&table),
            vec![("one", 2), ("two", 1), ("three", 1)]
        );
    }

    #[test]
    fn total_matches_token_count() {
        for text in [
            "",
            "note is just a note, note!",
            "one-two three",
            "  a  b\tc\n a ",
            "x1 y2 z3 !!",
        ] {
            assert_eq!(frequencies(text).total(), tokenize(text).len() as u64, "{text:?}");
        }
    }

    #[test]
    fn frequencies_is_deterministic() {
        let text = "the quick brown fox jumps over the lazy dog the end";
        assert_eq!(frequencies(text), frequencies(text));
    }

    #[test]
    fn normalize_is_idempotent() {
        let text = "It's 9:30 - Time for Tea!";
        let once = normalize(text);
        assert_eq!(once, "its   time for tea");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn get_returns_count_or_none() {
        let table = frequencies("a b a");
        assert_eq!(table.get("a"), Some(2));
        assert_eq!(table.get("z"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let table = frequencies("zeta alpha zeta");
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"zeta":2,"alpha":1}"#);
    }
}
