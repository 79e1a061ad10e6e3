//! Result page envelope returned by the search engine.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// One page of ranked search hits together with paging metadata.
///
/// `offset` is the 0-based index of the first returned hit within the full
/// match set; `num_found` is the total number of matches, which may exceed
/// the page size. A well-formed page holds
/// `min(rows, num_found - offset)` hits when `offset < num_found`, and none
/// otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPage {
    /// 0-based index of the first returned hit within the full match set.
    offset: usize,
    /// Requested page size.
    rows: usize,
    /// Estimated total number of matches for the query.
    num_found: usize,
    /// The returned hits, in rank order.
    hits: Vec<Document>,
}

impl ResultPage {
    /// Create a new empty result page.
    pub fn new(offset: usize, rows: usize, num_found: usize) -> Self {
        ResultPage {
            offset,
            rows,
            num_found,
            hits: Vec::new(),
        }
    }

    /// Append a hit to the page, in rank order.
    pub fn push_hit(&mut self, hit: Document) {
        self.hits.push(hit);
    }

    /// Append a hit to the page, fluent form.
    pub fn with_hit(mut self, hit: Document) -> Self {
        self.hits.push(hit);
        self
    }

    /// The 0-based offset of this page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The requested page size.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The total number of matches.
    pub fn num_found(&self) -> usize {
        self.num_found
    }

    /// The returned hits, in rank order.
    pub fn hits(&self) -> &[Document] {
        &self.hits
    }

    /// The number of hits a well-formed page at this offset should hold.
    pub fn expected_len(&self) -> usize {
        if self.offset < self.num_found {
            self.rows.min(self.num_found - self.offset)
        } else {
            0
        }
    }

    /// 1-based index of the first hit on this page.
    pub fn first_index(&self) -> usize {
        self.offset + 1
    }

    /// 1-based index of the last hit on this page.
    pub fn last_index(&self) -> usize {
        self.offset + self.hits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_len_within_match_set() {
        let page = ResultPage::new(0, 10, 25);
        assert_eq!(page.expected_len(), 10);

        let page = ResultPage::new(20, 10, 25);
        assert_eq!(page.expected_len(), 5);
    }

    #[test]
    fn test_expected_len_past_match_set() {
        let page = ResultPage::new(30, 10, 25);
        assert_eq!(page.expected_len(), 0);

        let page = ResultPage::new(25, 10, 25);
        assert_eq!(page.expected_len(), 0);
    }

    #[test]
    fn test_page_indices() {
        let mut page = ResultPage::new(10, 10, 100);
        for _ in 0..10 {
            page.push_hit(Document::new());
        }
        assert_eq!(page.first_index(), 11);
        assert_eq!(page.last_index(), 20);
    }
}
