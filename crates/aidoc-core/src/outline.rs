//! Outline cleanup
//!
//! The generator is asked for "exactly N titles, one per line" but answers
//! with preambles, numbering and markdown anyway. [`clean_outline`] recovers
//! a usable list of exactly `count` titles from such a response.

use std::sync::OnceLock;

use aidoc_model::{DocumentType, Section};
use log::debug;
use regex::Regex;

use crate::sanitize::sanitize;

/// Phrases that mark a line as commentary rather than a title
const PREAMBLE_MARKERS: &[&str] = &[
    "here are",
    "these are",
    "following",
    "presentation",
    "document",
    "titles",
    "for an",
    "about",
];

/// Lines longer than this are descriptions, not titles
const MAX_TITLE_WORDS: usize = 15;

fn numbering_re() -> &'static Regex {
    static NUMBERING_RE: OnceLock<Regex> = OnceLock::new();
    NUMBERING_RE.get_or_init(|| Regex::new(r"^\d+\s*[.)]\s*").unwrap())
}

fn is_preamble(line: &str) -> bool {
    let lower = line.to_lowercase();
    PREAMBLE_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn clean_title(line: &str) -> String {
    let title = sanitize(&numbering_re().replace(line, ""));
    numbering_re().replace(&title, "").trim().to_string()
}

/// Placeholder title for padding
fn placeholder(doc_type: DocumentType, number: usize) -> String {
    match doc_type {
        DocumentType::Word => format!("Section {}", number),
        DocumentType::Slide => format!("Slide {}", number),
    }
}

/// Extract exactly `count` titles from raw generated text.
///
/// Missing titles are padded with `Section N` / `Slide N`.
pub fn clean_outline(raw: &str, count: usize, doc_type: DocumentType) -> Vec<String> {
    let mut titles: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_preamble(line))
        .map(clean_title)
        .filter(|title| !title.is_empty())
        .filter(|title| title.split_whitespace().count() <= MAX_TITLE_WORDS)
        .take(count)
        .collect();

    if titles.len() < count {
        debug!(
            "Outline yielded {} of {} titles, padding",
            titles.len(),
            count
        );
    }
    while titles.len() < count {
        let number = titles.len() + 1;
        titles.push(placeholder(doc_type, number));
    }

    titles
}

/// Turn titles into empty sections numbered from 1.
pub fn outline_sections(titles: &[String]) -> Vec<Section> {
    titles
        .iter()
        .zip(1u32..)
        .map(|(title, id)| Section::outline_entry(id, title.clone()))
        .collect()
}
