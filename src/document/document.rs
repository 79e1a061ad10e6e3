//! Ordered, multi-valued field bag for result documents.

use serde::{Deserialize, Serialize};

/// A single named field occurrence on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// The internal schema name of the field.
    pub name: String,
    /// The stored string value for this occurrence.
    pub value: String,
}

/// A document as resolved by the search engine for one hit.
///
/// Unlike a plain map, the field bag preserves encounter order and allows
/// the same field name to occur more than once. Multiplicity is meaningful:
/// heading fields are multi-valued and every repetition contributes to
/// snippet aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The field occurrences for this document, in encounter order
    entries: Vec<FieldEntry>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document {
            entries: Vec::new(),
        }
    }

    /// Append a field occurrence to the document.
    pub fn push_field<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.entries.push(FieldEntry {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Get all field occurrences in encounter order.
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Get every value stored under a field name, in encounter order.
    pub fn values<'a, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// Get the first value stored under a field name.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.values(name).next()
    }

    /// Check if the document has at least one occurrence of a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Get the number of field occurrences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::new(),
        }
    }

    /// Append a field occurrence to the document.
    ///
    /// Calling this twice with the same name produces two occurrences, which
    /// is the intended representation for multi-valued fields.
    pub fn add_field<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.document.push_field(name, value);
        self
    }

    /// Build the final document.
    pub fn build(self) -> Document {
        self.document
    }
}
