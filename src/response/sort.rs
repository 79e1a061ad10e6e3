//! GSA sort-expression parsing.

use serde::{Deserialize, Serialize};

use crate::response::schema::SchemaField;

/// Structured decomposition of a compact GSA sort expression.
///
/// The wire form is `action:direction:mode:format`, e.g. `date:D:S:d1`.
/// Anything that does not split into exactly four parts degrades to a
/// raw-only descriptor, which the caller must treat as "use default
/// relevance order". Parsing never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The sort expression as received.
    raw: String,
    /// The sort action, e.g. `date`.
    action: Option<String>,
    /// The sort direction, `A` (ascending) or `D` (descending).
    direction: Option<String>,
    /// The relevance mode, `S`, `R` or `L`.
    mode: Option<String>,
    /// The sort format, e.g. `d1`.
    format: Option<String>,
}

impl SortSpec {
    /// Parse a compact sort expression.
    pub fn parse<S: Into<String>>(raw: S) -> Self {
        let raw = raw.into();
        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() != 4 {
            return SortSpec {
                raw,
                ..SortSpec::default()
            };
        }
        let action = Some(parts[0].to_string());
        let direction = Some(parts[1].to_string());
        let mode = Some(parts[2].to_string());
        let format = Some(parts[3].to_string());
        SortSpec {
            raw,
            action,
            direction,
            mode,
            format,
        }
    }

    /// The sort expression as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The sort action, if the expression was well formed.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// The sort direction, if the expression was well formed.
    pub fn direction(&self) -> Option<&str> {
        self.direction.as_deref()
    }

    /// The relevance mode, if the expression was well formed.
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// The sort format, if the expression was well formed.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Render this descriptor in the engine's native sort syntax.
    ///
    /// Only date sorts translate; everything else returns `None`, meaning
    /// default relevance order.
    pub fn to_engine_syntax(&self) -> Option<String> {
        if self.action.as_deref() == Some("date") {
            let direction = if self.direction.as_deref() == Some("D") {
                "desc"
            } else {
                "asc"
            };
            Some(format!("{} {}", SchemaField::LastModified.name(), direction))
        } else {
            None
        }
    }
}
