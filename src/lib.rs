//! # Sagitta
//!
//! A result-set transcoder for full-text search backends: it converts an
//! internally computed page of search hits into the XML wire protocol of the
//! Google Search Appliance, so that GSA clients can consume results from a
//! different engine without modification.
//!
//! ## Features
//!
//! - Ordered, multi-valued field bag document model
//! - GSA sort-expression parsing and engine sort translation
//! - Snippet selection with description fallback
//! - Byte-compatible `<GSP>` response assembly

pub mod document;
pub mod error;
pub mod response;
pub mod version;

pub mod prelude {
    pub use crate::document::{Document, DocumentBuilder, ResultPage, SnippetIndex};
    pub use crate::error::{Result, SagittaError};
    pub use crate::response::{GsaResponseWriter, RequestContext, SortSpec, WriterConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
