//! Low-level XML emission helpers.
//!
//! These match the reference wire format exactly: character data escapes
//! `&`, `<` and `>` only, elements with empty or absent values are skipped
//! rather than emitted empty, and every element is newline-terminated.

use std::io::Write;

use crate::error::Result;

/// Content type advertised for the produced body.
pub const CONTENT_TYPE: &str = "text/xml; charset=UTF-8";

const LB: &[u8] = b"\n";

/// Write `value` with XML character-data escaping.
pub fn write_escaped<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    let mut last = 0;
    for (i, b) in value.bytes().enumerate() {
        let replacement: &str = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => continue,
        };
        writer.write_all(value[last..i].as_bytes())?;
        writer.write_all(replacement.as_bytes())?;
        last = i + 1;
    }
    writer.write_all(value[last..].as_bytes())?;
    Ok(())
}

/// Escape `value` into a new string, for callers that need the text rather
/// than a stream.
pub fn escape(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len());
    // Writing to a Vec cannot fail.
    write_escaped(&mut out, value).ok();
    String::from_utf8(out).unwrap_or_default()
}

/// Emit `<name>escaped-value</name>` followed by a newline.
///
/// Absent or empty values are silently skipped; no empty element is ever
/// produced.
pub fn solitaire_tag<W: Write>(writer: &mut W, name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    writer.write_all(b"<")?;
    writer.write_all(name.as_bytes())?;
    writer.write_all(b">")?;
    write_escaped(writer, value)?;
    writer.write_all(b"</")?;
    writer.write_all(name.as_bytes())?;
    writer.write_all(b">")?;
    writer.write_all(LB)?;
    Ok(())
}

/// Emit a self-closing `<PARAM name=".." value=".." original_value=".."/>`.
///
/// The `value` attribute carries the escaped copy and `original_value` the
/// deliberately unescaped one; the reference writer emits both and clients
/// depend on the doubled attribute, so this is preserved verbatim. Absent or
/// empty values skip the element entirely.
pub fn param_tag<W: Write>(writer: &mut W, name: &str, value: Option<&str>) -> Result<()> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(()),
    };
    writer.write_all(b"<PARAM name=\"")?;
    writer.write_all(name.as_bytes())?;
    writer.write_all(b"\" value=\"")?;
    write_escaped(writer, value)?;
    writer.write_all(b"\" original_value=\"")?;
    writer.write_all(value.as_bytes())?;
    writer.write_all(b"\"/>")?;
    writer.write_all(LB)?;
    Ok(())
}

/// Emit `</name>` followed by a newline.
pub fn close_tag<W: Write>(writer: &mut W, name: &str) -> Result<()> {
    writer.write_all(b"</")?;
    writer.write_all(name.as_bytes())?;
    writer.write_all(b">")?;
    writer.write_all(LB)?;
    Ok(())
}
