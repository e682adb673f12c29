//! Small XML helpers shared by the OOXML writers and readers

use quick_xml::events::BytesStart;

/// Escape special XML characters.
///
/// Characters XML 1.0 cannot carry at all (C0 controls other than tab,
/// newline and carriage return, U+FFFE, U+FFFF) are dropped.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// Read an attribute by its qualified name (e.g. `w:val`)
pub fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

/// Fixed package timestamp so identical input yields identical bytes
pub const PACKAGE_TIMESTAMP: &str = "2025-01-01T00:00:00Z";
