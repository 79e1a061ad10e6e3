//! GSA-compatible response assembly.
//!
//! This module turns one [`ResultPage`](crate::document::ResultPage) plus a
//! [`SnippetIndex`](crate::document::SnippetIndex) into the `<GSP>` XML body
//! a Google Search Appliance client expects. Data flows strictly downward:
//! the page writer drives the sort parser (once, for the header echo) and the
//! hit transcoder (once per hit), which drives schema lookups and the wire
//! helpers. No component calls back upward.

pub mod context;
pub mod hit;
pub mod schema;
pub mod sort;
pub mod writer;
pub mod xml;

pub use self::context::RequestContext;
pub use self::hit::TranscodedHit;
pub use self::schema::{GsaToken, SchemaField};
pub use self::sort::SortSpec;
pub use self::writer::{GsaResponseWriter, WriterConfig};
