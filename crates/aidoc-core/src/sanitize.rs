//! Text sanitizing for generated content
//!
//! Generated text arrives with markdown emphasis, bullet remnants and stray
//! whitespace. [`sanitize`] reduces it to plain renderable text and is
//! idempotent: `sanitize(sanitize(x)) == sanitize(x)`.

use std::sync::OnceLock;

use regex::Regex;

fn bold_re() -> &'static Regex {
    static BOLD_RE: OnceLock<Regex> = OnceLock::new();
    BOLD_RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

fn italic_re() -> &'static Regex {
    static ITALIC_RE: OnceLock<Regex> = OnceLock::new();
    ITALIC_RE.get_or_init(|| Regex::new(r"\*(.+?)\*").unwrap())
}

fn orphan_bold_re() -> &'static Regex {
    static ORPHAN_RE: OnceLock<Regex> = OnceLock::new();
    ORPHAN_RE.get_or_init(|| Regex::new(r"\*{2,}").unwrap())
}

fn spaced_marker_re() -> &'static Regex {
    static SPACED_RE: OnceLock<Regex> = OnceLock::new();
    // A run of spaced markers goes in one match
    SPACED_RE.get_or_init(|| Regex::new(r"(?m)^(?:[^\S\n]*[*\-•][^\S\n]+)+").unwrap())
}

fn leading_marker_re() -> &'static Regex {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    // Horizontal whitespace only, so a marker never swallows a line break
    MARKER_RE.get_or_init(|| Regex::new(r"(?m)^[^\S\n]*[*\-•][^\S\n]*").unwrap())
}

/// One stripping pass over the text
fn strip_once(text: &str) -> String {
    // A bullet "* " must go before emphasis, or its asterisk pairs with one in the text
    let text = spaced_marker_re().replace_all(text, "");
    let text = bold_re().replace_all(&text, "$1");
    let text = italic_re().replace_all(&text, "$1");
    let text = orphan_bold_re().replace_all(&text, "");
    let text = leading_marker_re().replace_all(&text, "");
    text.trim().to_string()
}

/// Normalize raw generated text into clean content.
///
/// - `**bold**` and `*italic*` are reduced to their inner text
/// - a leading `*`, `-` or `•` marker is removed from every line
/// - the result is trimmed
///
/// Every pass only removes characters, so iterating to a fixed point
/// terminates and makes the function idempotent.
pub fn sanitize(raw: &str) -> String {
    let mut current = strip_once(raw);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Sanitize and split into non-empty, trimmed lines (one per bullet).
pub fn bullet_lines(raw: &str) -> Vec<String> {
    sanitize(raw)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
