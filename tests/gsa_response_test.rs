//! Integration tests for GSA response assembly

use sagitta::prelude::*;

// 2021-01-01T00:00:00Z as epoch milliseconds
const EPOCH_MS_2021: &str = "1609459200000";

fn sample_hit() -> Document {
    Document::builder()
        .add_field("id", "abc123")
        .add_field("sku", "http://example.com/x")
        .add_field("title", "Hello")
        .add_field("description", "World")
        .add_field("last_modified", EPOCH_MS_2021)
        .add_field("size_i", "4096")
        .build()
}

fn render(page: &ResultPage, snippets: &SnippetIndex, context: &RequestContext) -> String {
    let mut out = Vec::new();
    GsaResponseWriter::new()
        .write(&mut out, page, snippets, context)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_end_to_end_single_hit() {
    let page = ResultPage::new(0, 10, 25).with_hit(sample_hit());
    let context = RequestContext::new()
        .q("hello")
        .client("test")
        .site("test");

    let body = render(&page, &SnippetIndex::new(), &context);

    assert!(body.starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n<GSP VER=\"3.2\">\n"
    ));
    assert!(body.contains("<RES SN=\"1\" EN=\"1\">"));
    assert!(body.contains("<M>25</M>"));
    assert!(body.contains("<R N=\"1\">"));
    assert!(body.contains("<U>http://example.com/x</U>"));
    assert!(body.contains("<UE>http://example.com/x</UE>"));
    assert!(body.contains("<T>Hello</T>"));
    assert!(body.contains("<CACHE_LAST_MODIFIED>Fri, 01 Jan 2021 00:00:00 GMT</CACHE_LAST_MODIFIED>"));
    // no snippet entry for abc123, so the description stands in
    assert!(body.contains("<S>World</S>"));
    assert!(body.contains("<GD>World</GD>"));
    assert!(body.contains("<C SZ=\"4k\" CID=\"abc123\" ENC=\"UTF-8\"/>"));
    assert!(body.contains("<ENT_SOURCE>"));
    assert!(body.ends_with("</RES>\n</GSP>\n"));
}

#[test]
fn test_snippet_takes_priority_over_description() {
    let page = ResultPage::new(0, 10, 1).with_hit(sample_hit());
    let mut snippets = SnippetIndex::new();
    snippets.push("abc123", "Hello <b>World</b> excerpt");
    snippets.push("abc123", "second candidate");

    let body = render(&page, &snippets, &RequestContext::new().q("hello"));

    assert!(body.contains("<S>Hello &lt;b&gt;World&lt;/b&gt; excerpt</S>"));
    assert!(!body.contains("<S>World</S>"));
    // the KeyMatch description is independent of snippet selection
    assert!(body.contains("<GD>World</GD>"));
}

#[test]
fn test_multi_page_pagination_markers() {
    let mut page = ResultPage::new(20, 10, 25);
    for i in 20..25 {
        page.push_hit(
            Document::builder()
                .add_field("id", format!("doc{i}"))
                .build(),
        );
    }
    assert_eq!(page.hits().len(), page.expected_len());

    let context = RequestContext::new().q("hello").access("a");
    let body = render(&page, &SnippetIndex::new(), &context);

    assert!(body.contains("<RES SN=\"21\" EN=\"25\">"));
    assert!(body.contains("<R N=\"21\">"));
    assert!(body.contains("<R N=\"22\" L=\"2\">"));
    assert!(body.contains("<R N=\"25\">"));
    assert!(body.contains("&amp;start=25&amp;sa=N"));
}

#[test]
fn test_header_parameter_echo() {
    let page = ResultPage::new(0, 10, 0);
    let context = RequestContext::new()
        .q("chicken teriyaki")
        .sort("date:D:S:d1")
        .client("test")
        .site("test")
        .ip("127.0.0.1")
        .access("p")
        .entqr("3");

    let body = render(&page, &SnippetIndex::new(), &context);

    assert!(body.contains("<Q>chicken teriyaki</Q>"));
    for (name, value) in [
        ("sort", "date:D:S:d1"),
        ("output", "xml_no_dtd"),
        ("ie", "UTF-8"),
        ("oe", "UTF-8"),
        ("client", "test"),
        ("q", "chicken teriyaki"),
        ("site", "test"),
        ("start", "0"),
        ("num", "10"),
        ("ip", "127.0.0.1"),
        ("access", "p"),
        ("entqr", "3"),
    ] {
        let expected =
            format!("<PARAM name=\"{name}\" value=\"{value}\" original_value=\"{value}\"/>");
        assert!(body.contains(&expected), "missing PARAM echo for {name}");
    }
}

#[test]
fn test_absent_parameters_are_omitted() {
    let page = ResultPage::new(0, 10, 0);
    let body = render(&page, &SnippetIndex::new(), &RequestContext::new());

    assert!(!body.contains("name=\"sort\""));
    assert!(!body.contains("name=\"client\""));
    assert!(!body.contains("name=\"site\""));
    assert!(!body.contains("name=\"ip\""));
    assert!(!body.contains("name=\"access\""));
    assert!(!body.contains("name=\"entqr\""));
    assert!(!body.contains("<Q>"));
    // fixed parameters are always present
    assert!(body.contains("name=\"output\""));
}

#[test]
fn test_heading_multiplicity_feeds_snippet_pool() {
    use sagitta::response::TranscodedHit;

    let doc = Document::builder()
        .add_field("title", "Hello")
        .add_field("h2_txt", "A")
        .add_field("h2_txt", "B")
        .add_field("h2_txt", "C")
        .add_field("text_t", "body text")
        .build();
    let hit = TranscodedHit::interpret(&doc).unwrap();
    assert_eq!(hit.texts(), &["Hello", "A", "B", "C", "body text"]);
}

#[test]
fn test_document_from_json_fixture() {
    let fixture = serde_json::json!({
        "entries": [
            { "name": "id", "value": "abc123" },
            { "name": "title", "value": "Hello" },
            { "name": "description", "value": "World" }
        ]
    });
    let doc: Document = serde_json::from_value(fixture).unwrap();
    let page = ResultPage::new(0, 10, 1).with_hit(doc);

    let body = render(&page, &SnippetIndex::new(), &RequestContext::new().q("hello"));
    assert!(body.contains("<T>Hello</T>"));
    assert!(body.contains("<S>World</S>"));
}

#[test]
fn test_sort_round_trip_in_header() {
    let spec = SortSpec::parse("date:D:S:d1");
    assert_eq!(spec.to_engine_syntax().as_deref(), Some("last_modified desc"));

    let page = ResultPage::new(0, 10, 0);
    let context = RequestContext::new().sort("date:D:S:d1");
    let body = render(&page, &SnippetIndex::new(), &context);
    assert!(body.contains(
        "<PARAM name=\"sort\" value=\"date:D:S:d1\" original_value=\"date:D:S:d1\"/>"
    ));
}

#[test]
fn test_content_type() {
    assert_eq!(
        GsaResponseWriter::new().content_type(),
        "text/xml; charset=UTF-8"
    );
}
