//! Word matching between queries and product names.
//!
//! A product matches a query when every query word appears among the
//! product name's words. Matching is case-insensitive and order-free;
//! there is no stemming and no partial-word matching.

use std::collections::HashSet;

/// Splits a product name into its lowercase words.
///
/// - Lowercases the whole name
/// - Treats `,` exactly like `.`
/// - Splits on whitespace
/// - Drops a run of `.` ending a word, so `"milk, 1l."` gives `milk`, `1l`
/// - Keeps internal periods, so `"3.2%"` stays one word
#[must_use]
pub fn name_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in name.to_lowercase().chars() {
        match ch {
            c if c.is_whitespace() => flush(&mut words, &mut current),
            ',' => current.push('.'),
            _ => current.push(ch),
        }
    }

    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    let word = current.trim_end_matches('.');
    if !word.is_empty() {
        words.push(word.to_owned());
    }
    current.clear();
}

/// The word set of a query, ready to test many names against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryWords {
    words: HashSet<String>,
}

impl QueryWords {
    /// Lowercases `query` and splits it on whitespace.
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            words: query
                .to_lowercase()
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Returns true if the query has no words.
    ///
    /// An empty word set matches every name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct query words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Tests whether every query word occurs in `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        if self.words.is_empty() {
            return true;
        }
        let name_words: HashSet<String> = name_words(name).into_iter().collect();
        self.words.is_subset(&name_words)
    }
}

/// Tests whether `name` contains every word of `query`.
#[must_use]
pub fn matches(name: &str, query: &str) -> bool {
    QueryWords::new(query).matches(name)
}
