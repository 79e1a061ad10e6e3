//! Field mapping between the internal schema and the GSA output vocabulary.
//!
//! [`SchemaField`] is the single source of truth for the recognized internal
//! field names: the transcoder's dispatch, the generic tag table and the
//! engine-side field projection are all derived from it.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Output tokens of the GSA XML protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GsaToken {
    /// Date the document was fetched, from the Date header at crawl time.
    CacheLastModified,
    /// Date the page was crawled.
    Crawldate,
    /// The URL of the search result.
    U,
    /// The URL-encoded version of the URL in the U element.
    Ue,
    /// Description of a KeyMatch result.
    Gd,
    /// The title of the search result.
    T,
    /// Ranking number used internally by the appliance.
    Rk,
    /// Application ID (serial number) of the appliance contributing the result.
    EntSource,
    /// Additional details about the search result.
    Fs,
    /// The snippet for the search result.
    S,
    /// Two-letter language code of the result.
    Lang,
    /// Encapsulates special features included for this result.
    Has,
}

impl GsaToken {
    /// The literal tag name on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            GsaToken::CacheLastModified => "CACHE_LAST_MODIFIED",
            GsaToken::Crawldate => "CRAWLDATE",
            GsaToken::U => "U",
            GsaToken::Ue => "UE",
            GsaToken::Gd => "GD",
            GsaToken::T => "T",
            GsaToken::Rk => "RK",
            GsaToken::EntSource => "ENT_SOURCE",
            GsaToken::Fs => "FS",
            GsaToken::S => "S",
            GsaToken::Lang => "LANG",
            GsaToken::Has => "HAS",
        }
    }
}

/// Recognized internal schema fields.
///
/// Only fields listed here are requested from the engine when resolving a
/// hit; the projection is deliberately small to bound I/O and improve cache
/// locality in the underlying searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaField {
    /// Stable document identifier, joins hits against snippets.
    Id,
    /// Canonical URL of the document.
    Sku,
    /// Document title.
    Title,
    /// Stored description, the final snippet fallback.
    Description,
    /// Last-modified time as an epoch-millisecond integer.
    LastModified,
    /// Load (crawl) time as an epoch-millisecond integer.
    LoadDate,
    /// Full body text.
    TextBody,
    /// Heading levels, multi-valued.
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    /// Document size in bytes.
    Size,
    /// Two-letter language code.
    Language,
}

impl SchemaField {
    /// All recognized fields, in projection order.
    pub const ALL: [SchemaField; 15] = [
        SchemaField::Id,
        SchemaField::Sku,
        SchemaField::Title,
        SchemaField::Description,
        SchemaField::LastModified,
        SchemaField::LoadDate,
        SchemaField::TextBody,
        SchemaField::H1,
        SchemaField::H2,
        SchemaField::H3,
        SchemaField::H4,
        SchemaField::H5,
        SchemaField::H6,
        SchemaField::Size,
        SchemaField::Language,
    ];

    /// The internal schema name of this field.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaField::Id => "id",
            SchemaField::Sku => "sku",
            SchemaField::Title => "title",
            SchemaField::Description => "description",
            SchemaField::LastModified => "last_modified",
            SchemaField::LoadDate => "load_date_dt",
            SchemaField::TextBody => "text_t",
            SchemaField::H1 => "h1_txt",
            SchemaField::H2 => "h2_txt",
            SchemaField::H3 => "h3_txt",
            SchemaField::H4 => "h4_txt",
            SchemaField::H5 => "h5_txt",
            SchemaField::H6 => "h6_txt",
            SchemaField::Size => "size_i",
            SchemaField::Language => "language_s",
        }
    }

    /// Resolve an internal schema name to its field, if recognized.
    pub fn from_name(name: &str) -> Option<SchemaField> {
        static BY_NAME: OnceLock<HashMap<&'static str, SchemaField>> = OnceLock::new();
        BY_NAME
            .get_or_init(|| SchemaField::ALL.iter().map(|f| (f.name(), *f)).collect())
            .get(name)
            .copied()
    }

    /// Check if this is one of the multi-valued heading fields.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            SchemaField::H1
                | SchemaField::H2
                | SchemaField::H3
                | SchemaField::H4
                | SchemaField::H5
                | SchemaField::H6
        )
    }

    /// The generic output tag for fields copied through without specific
    /// handling. Currently only the language field maps this way.
    pub fn generic_tag(&self) -> Option<GsaToken> {
        match self {
            SchemaField::Language => Some(GsaToken::Lang),
            _ => None,
        }
    }
}

/// Look up the generic output tag for an internal field name, O(1).
pub fn generic_tag(field_name: &str) -> Option<GsaToken> {
    static FIELD2TAG: OnceLock<HashMap<&'static str, GsaToken>> = OnceLock::new();
    FIELD2TAG
        .get_or_init(|| {
            SchemaField::ALL
                .iter()
                .filter_map(|f| f.generic_tag().map(|t| (f.name(), t)))
                .collect()
        })
        .get(field_name)
        .copied()
}

/// The exact set of field names to request from the engine when resolving a
/// hit. Built once per process, immutable thereafter.
pub fn requested_fields() -> &'static HashSet<&'static str> {
    static FIELDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    FIELDS.get_or_init(|| SchemaField::ALL.iter().map(|f| f.name()).collect())
}
