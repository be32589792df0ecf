//! Address bar query splitting
//!
//! A query is split once, on the first space: the first word selects an alias or
//! engine, the remainder is the text handed to it.

use serde::{Deserialize, Serialize};

/// First word that forces a search of the remainder
pub const SEARCH_ESCAPE: &str = "search";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    original: String,
}

impl AddressQuery {
    /// Build a query from raw input, kept as typed
    pub fn new(raw: &str) -> Self {
        Self {
            original: raw.to_string(),
        }
    }

    /// Join command arguments the way the command line hands them over
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let joined = args
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(&joined)
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Nothing but whitespace was typed
    pub fn is_empty(&self) -> bool {
        self.original.trim().is_empty()
    }

    /// Everything up to the first space
    pub fn first_word(&self) -> &str {
        match self.original.find(' ') {
            Some(idx) => &self.original[..idx],
            None => &self.original,
        }
    }

    /// Everything after the first space. Only the separating space is dropped.
    pub fn remainder(&self) -> &str {
        let first = self.first_word();
        self.original.get(first.len() + 1..).unwrap_or("")
    }

    /// True for `search ...`
    pub fn is_search_escape(&self) -> bool {
        self.first_word() == SEARCH_ESCAPE
    }
}

impl std::fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}
