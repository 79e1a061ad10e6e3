//! Document model at the search-engine boundary.
//!
//! The types in this module are the transcoder's view of what the engine
//! returns for one query: an ordered page of documents, each an ordered
//! multi-valued field bag, plus the highlighter's snippet candidates.

pub mod document;
pub mod page;
pub mod snippet;

pub use self::document::{Document, DocumentBuilder, FieldEntry};
pub use self::page::ResultPage;
pub use self::snippet::SnippetIndex;
