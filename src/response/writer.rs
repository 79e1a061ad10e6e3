//! GSA result page assembly.
//!
//! Example request shape on the front-end:
//! `GET /gsa/searchresult?q=chicken+teriyaki&output=xml&client=test&site=test&sort=date:D:S:d1`.
//! For the XML reference, see the Google Search Appliance XML protocol
//! documentation (protocol version 3.2).

use std::io::Write;
use std::time::Instant;

use tracing::debug;

use crate::document::{ResultPage, SnippetIndex};
use crate::error::Result;
use crate::response::context::RequestContext;
use crate::response::hit::TranscodedHit;
use crate::response::sort::SortSpec;
use crate::response::xml;

const XML_START: &[u8] =
    b"<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n<GSP VER=\"3.2\">\n";
const XML_STOP: &[u8] = b"</GSP>\n";

const OUTPUT_FORMAT: &str = "xml_no_dtd";
const CHARSET: &str = "UTF-8";

/// Configuration for response assembly.
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Truly percent-encode the `UE` element instead of repeating the `U`
    /// value verbatim. The reference writer repeats the value, so this is
    /// off by default; enabling it deviates from wire compatibility.
    pub percent_encode_ue: bool,
}

impl WriterConfig {
    /// Create a new configuration with reference-compatible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable true percent-encoding of the `UE` element.
    pub fn percent_encode_ue(mut self, enabled: bool) -> Self {
        self.percent_encode_ue = enabled;
        self
    }
}

/// Assembles one GSA XML response body from a result page.
///
/// The writer is stateless per request and safe to share across threads.
/// If any step fails the output is left incomplete; nothing is rolled back
/// or retried here.
#[derive(Debug, Clone, Default)]
pub struct GsaResponseWriter {
    config: WriterConfig,
}

impl GsaResponseWriter {
    /// Create a writer with reference-compatible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with an explicit configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        GsaResponseWriter { config }
    }

    /// The content type to advertise for the produced body.
    pub fn content_type(&self) -> &'static str {
        xml::CONTENT_TYPE
    }

    /// Assemble the complete response body into `writer`.
    pub fn write<W: Write>(
        &self,
        writer: &mut W,
        page: &ResultPage,
        snippets: &SnippetIndex,
        context: &RequestContext,
    ) -> Result<()> {
        let start = Instant::now();
        let count = page.hits().len();
        debug!(
            offset = page.offset(),
            rows = page.rows(),
            num_found = page.num_found(),
            hits = count,
            "assembling GSA result page"
        );

        let sort = SortSpec::parse(context.sort.clone().unwrap_or_default());
        if let Some(engine_sort) = sort.to_engine_syntax() {
            debug!(%engine_sort, "sort expression translated");
        }

        // header
        writer.write_all(XML_START)?;
        xml::solitaire_tag(writer, "TM", &start.elapsed().as_millis().to_string())?;
        xml::solitaire_tag(writer, "Q", context.q.as_deref().unwrap_or(""))?;
        xml::param_tag(writer, "sort", Some(sort.raw()))?;
        xml::param_tag(writer, "output", Some(OUTPUT_FORMAT))?;
        xml::param_tag(writer, "ie", Some(CHARSET))?;
        xml::param_tag(writer, "oe", Some(CHARSET))?;
        xml::param_tag(writer, "client", context.client.as_deref())?;
        xml::param_tag(writer, "q", context.q.as_deref())?;
        xml::param_tag(writer, "site", context.site.as_deref())?;
        xml::param_tag(writer, "start", Some(&page.offset().to_string()))?;
        xml::param_tag(writer, "num", Some(&page.rows().to_string()))?;
        xml::param_tag(writer, "ip", context.ip.as_deref())?;
        xml::param_tag(writer, "access", context.access.as_deref())?;
        xml::param_tag(writer, "entqr", context.entqr.as_deref())?;

        // body introduction: 1-based first and last indices of this page
        write!(
            writer,
            "<RES SN=\"{}\" EN=\"{}\">\n",
            page.first_index(),
            page.last_index()
        )?;
        write!(writer, "<M>{}</M>\n", page.num_found())?;
        writer.write_all(b"<FI/>\n")?;
        writer.write_all(b"<NB><NU>")?;
        xml::write_escaped(writer, &next_page_link(page, context))?;
        writer.write_all(b"</NU></NB>\n")?;

        // body
        for (i, doc) in page.hits().iter().enumerate() {
            let rank = page.offset() + i + 1;
            match result_level(i) {
                Some(level) => write!(writer, "<R N=\"{rank}\" L=\"{level}\">\n")?,
                None => write!(writer, "<R N=\"{rank}\">\n")?,
            }
            let hit = TranscodedHit::interpret(doc)?;
            hit.write(writer, snippets, &self.config)?;
            xml::close_tag(writer, "R")?;
        }
        writer.write_all(b"</RES>\n")?;
        writer.write_all(XML_STOP)?;

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            hits = count,
            "GSA result page assembled"
        );
        Ok(())
    }
}

/// The extra level attribute applied while iterating results.
///
/// The reference protocol marks exactly the second result on a page with
/// `L="2"`; the rationale is not documented, so the rule is kept explicit
/// and positional rather than folded into the loop.
fn result_level(local_index: usize) -> Option<u32> {
    if local_index == 1 { Some(2) } else { None }
}

/// Build the relative URL of the next results page by re-serializing the
/// request parameters with `start` advanced past this page. The value is
/// XML-escaped exactly once by the caller, never URL-escaped.
fn next_page_link(page: &ResultPage, context: &RequestContext) -> String {
    let next_start = page.offset() + page.hits().len();
    format!(
        "/search?q={}&site={}&lr=&ie={CHARSET}&oe={CHARSET}&output={OUTPUT_FORMAT}&client={}&access={}&sort={}&start={}&sa=N",
        context.q.as_deref().unwrap_or(""),
        context.site.as_deref().unwrap_or(""),
        context.client.as_deref().unwrap_or(""),
        context.access.as_deref().unwrap_or(""),
        context.sort.as_deref().unwrap_or(""),
        next_start
    )
}
