//! Per-hit transcoding from the internal field bag to GSA output elements.
//!
//! Transcoding is split into two phases so field interpretation can be
//! tested without a writer: [`TranscodedHit::interpret`] walks the field bag
//! once and produces an intermediate structured result, then
//! [`TranscodedHit::write`] emits the elements in wire order.

use std::io::Write;

use chrono::{TimeZone, Utc};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::document::{Document, SnippetIndex};
use crate::error::{Result, SagittaError};
use crate::response::schema::{self, GsaToken, SchemaField};
use crate::response::writer::WriterConfig;
use crate::response::xml;
use crate::version;

/// The interpreted form of one hit, ready for emission.
///
/// `elements` holds the pass-through output elements in field encounter
/// order; the remaining members are the captures that feed the trailing
/// snippet, KeyMatch and features elements.
#[derive(Debug, Clone, Default)]
pub struct TranscodedHit {
    /// Output elements in field encounter order.
    elements: Vec<(GsaToken, String)>,
    /// Stable document identifier, joins against the snippet index.
    document_id: Option<String>,
    /// Stored description; the final snippet fallback, possibly empty.
    description: String,
    /// Document size in bytes.
    size_bytes: i64,
    /// Aggregated text pool: title, description, body and every heading
    /// occurrence plus raw timestamp values, in encounter order.
    texts: Vec<String>,
}

impl TranscodedHit {
    /// Interpret one document's field bag.
    ///
    /// Unrecognized fields are ignored. A non-parseable timestamp or size
    /// value is fatal to the current request and propagates as a field
    /// error.
    pub fn interpret(doc: &Document) -> Result<TranscodedHit> {
        let mut hit = TranscodedHit::default();
        for entry in doc.entries() {
            let value = entry.value.as_str();

            // apply the generic matching rule first
            if let Some(tag) = schema::generic_tag(&entry.name) {
                hit.elements.push((tag, value.to_string()));
                continue;
            }

            // if the rule is not generic, use the specific one
            let Some(field) = SchemaField::from_name(&entry.name) else {
                continue;
            };
            match field {
                SchemaField::Id => {
                    hit.document_id = Some(value.to_string());
                }
                SchemaField::Sku => {
                    hit.elements.push((GsaToken::U, value.to_string()));
                    hit.elements.push((GsaToken::Ue, value.to_string()));
                }
                SchemaField::Title => {
                    hit.elements.push((GsaToken::T, value.to_string()));
                    hit.texts.push(value.to_string());
                }
                SchemaField::Description => {
                    hit.description = value.to_string();
                    hit.texts.push(value.to_string());
                }
                SchemaField::LastModified => {
                    let formatted = format_rfc1123(&entry.name, value)?;
                    hit.elements.push((GsaToken::CacheLastModified, formatted));
                    hit.texts.push(value.to_string());
                }
                SchemaField::LoadDate => {
                    let formatted = format_rfc1123(&entry.name, value)?;
                    hit.elements.push((GsaToken::Crawldate, formatted));
                    hit.texts.push(value.to_string());
                }
                SchemaField::TextBody => {
                    hit.texts.push(value.to_string());
                }
                field if field.is_heading() => {
                    // multi-valued; every occurrence contributes
                    hit.texts.push(value.to_string());
                }
                SchemaField::Size => {
                    hit.size_bytes = value.parse::<i64>().map_err(|_| {
                        SagittaError::field(format!(
                            "non-integer size value in {}: {value:?}",
                            entry.name
                        ))
                    })?;
                }
                SchemaField::Language => {
                    // covered by the generic rule above
                    hit.elements.push((GsaToken::Lang, value.to_string()));
                }
                _ => unreachable!("heading fields handled by guard arm"),
            }
        }
        Ok(hit)
    }

    /// The captured document identifier, if the id field was present.
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    /// The captured description, possibly empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The captured document size in bytes.
    pub fn size_bytes(&self) -> i64 {
        self.size_bytes
    }

    /// The aggregated text pool, in encounter order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Resolve the snippet for this hit: the first highlighter candidate
    /// when one exists, else the stored description.
    pub fn snippet<'a>(&'a self, snippets: &'a SnippetIndex) -> &'a str {
        self.document_id
            .as_deref()
            .and_then(|id| snippets.candidates(id))
            .filter(|candidates| !candidates.is_empty())
            .map(|candidates| candidates[0].as_str())
            .unwrap_or(&self.description)
    }

    /// The cache-size bucket for the features element: size divided by 1024,
    /// truncating toward zero.
    pub fn size_kilobytes(&self) -> i64 {
        self.size_bytes / 1024
    }

    /// Emit this hit's output elements in wire order.
    pub fn write<W: Write>(
        &self,
        writer: &mut W,
        snippets: &SnippetIndex,
        config: &WriterConfig,
    ) -> Result<()> {
        for (token, value) in &self.elements {
            if *token == GsaToken::Ue && config.percent_encode_ue {
                let encoded = utf8_percent_encode(value, NON_ALPHANUMERIC).to_string();
                xml::solitaire_tag(writer, token.name(), &encoded)?;
            } else {
                xml::solitaire_tag(writer, token.name(), value)?;
            }
        }
        xml::solitaire_tag(writer, GsaToken::S.name(), self.snippet(snippets))?;
        xml::solitaire_tag(writer, GsaToken::Gd.name(), &self.description)?;
        write!(
            writer,
            "<HAS><L/><C SZ=\"{}k\" CID=\"{}\" ENC=\"UTF-8\"/></HAS>\n",
            self.size_kilobytes(),
            self.document_id.as_deref().unwrap_or("")
        )?;
        xml::solitaire_tag(writer, GsaToken::EntSource.name(), version::identity())?;
        Ok(())
    }
}

/// Parse an epoch-millisecond timestamp and render it as RFC 1123.
fn format_rfc1123(field_name: &str, value: &str) -> Result<String> {
    let millis = value.parse::<i64>().map_err(|_| {
        SagittaError::field(format!(
            "non-integer millisecond timestamp in {field_name}: {value:?}"
        ))
    })?;
    let datetime = Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
        SagittaError::field(format!(
            "out-of-range millisecond timestamp in {field_name}: {millis}"
        ))
    })?;
    Ok(datetime.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}
