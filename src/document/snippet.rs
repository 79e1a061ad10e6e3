//! Snippet candidates supplied by the highlighting subsystem.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping from document identifier to ordered snippet candidates.
///
/// The highlighter may produce zero or more candidates per document; the
/// transcoder only ever uses the first one and falls back to the stored
/// description when the list is absent or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnippetIndex {
    candidates: HashMap<String, Vec<String>>,
}

impl SnippetIndex {
    /// Create a new empty snippet index.
    pub fn new() -> Self {
        SnippetIndex {
            candidates: HashMap::new(),
        }
    }

    /// Build an index from a per-document fragment mapping, as produced by
    /// the highlighting subsystem.
    pub fn from_fragments(fragments: HashMap<String, Vec<String>>) -> Self {
        SnippetIndex {
            candidates: fragments,
        }
    }

    /// Replace the candidate list for a document.
    pub fn insert<S: Into<String>>(&mut self, doc_id: S, snippets: Vec<String>) {
        self.candidates.insert(doc_id.into(), snippets);
    }

    /// Append one candidate for a document.
    pub fn push<S: Into<String>, T: Into<String>>(&mut self, doc_id: S, snippet: T) {
        self.candidates
            .entry(doc_id.into())
            .or_default()
            .push(snippet.into());
    }

    /// Get the candidate list for a document, if any.
    pub fn candidates(&self, doc_id: &str) -> Option<&[String]> {
        self.candidates.get(doc_id).map(|v| v.as_slice())
    }

    /// Get the first candidate for a document, if the list exists and is
    /// non-empty.
    pub fn first(&self, doc_id: &str) -> Option<&str> {
        self.candidates
            .get(doc_id)
            .and_then(|v| v.first())
            .map(|s| s.as_str())
    }

    /// The number of documents with candidate lists.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_candidate() {
        let mut index = SnippetIndex::new();
        index.push("abc", "first <b>match</b>");
        index.push("abc", "second match");

        assert_eq!(index.first("abc"), Some("first <b>match</b>"));
        assert_eq!(index.first("missing"), None);
    }

    #[test]
    fn test_empty_candidate_list() {
        let mut index = SnippetIndex::new();
        index.insert("abc", Vec::new());
        assert_eq!(index.first("abc"), None);
        assert!(index.candidates("abc").unwrap().is_empty());
    }
}
