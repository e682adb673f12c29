//! Integration tests for the aidoc CLI
//!
//! These drive the command functions against real files: a JSON request in,
//! an office package out, and the package read back.

use std::fs;
use std::io::{Cursor, Write};

use aidoc_cli::{inspect_report, outline_command, render_command};
use aidoc_model::DocumentType;
use aidoc_ooxml::WordOutline;
use aidoc_pptx::SlideReader;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const SLIDE_REQUEST: &str = r#"{
    "topic": "AI Trading",
    "docType": "pptx",
    "sections": [
        {"id": 1, "title": "Introduction", "content": "• What it is\n• Why now"},
        {"id": 2, "title": "Risk Factors", "content": "- **Volatility**\n- Regulation"},
        {"id": 3, "title": "Wrap", "content": ""}
    ]
}"#;

#[test]
fn test_render_slides_to_default_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("request.json");
    fs::write(&input, SLIDE_REQUEST).unwrap();

    let written = render_command(&input, None, None).unwrap();
    assert_eq!(written, dir.path().join("AI_Trading.pptx"));

    let bytes = fs::read(&written).unwrap();
    let slides = SlideReader::from_bytes(&bytes).unwrap().slides().unwrap();
    assert_eq!(slides.len(), 4);
    assert_eq!(slides[2].bullets, vec!["Volatility", "Regulation"]);
    assert!(slides[3].bullets.is_empty());
    // professional_blue when neither request nor config names a theme
    assert_eq!(
        slides[0].background.as_ref().unwrap().stops,
        vec!["E3F2FD", "BBDEFB"]
    );
}

#[test]
fn test_render_with_config_theme() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("request.json");
    let config = dir.path().join("aidoc.toml");
    let output = dir.path().join("deck.pptx");
    fs::write(&input, SLIDE_REQUEST).unwrap();
    fs::write(
        &config,
        "[export]\ndefault_theme = \"modern_dark\"\n\n[deck]\nsubtitle = \"Board Update\"\n",
    )
    .unwrap();

    render_command(&input, Some(&output), Some(&config)).unwrap();

    let bytes = fs::read(&output).unwrap();
    let slides = SlideReader::from_bytes(&bytes).unwrap().slides().unwrap();
    assert_eq!(
        slides[1].background.as_ref().unwrap().stops,
        vec!["303030", "212121"]
    );
    assert_eq!(slides[0].text("Subtitle").as_deref(), Some("Board Update"));

    let report = inspect_report(&bytes).unwrap();
    assert!(report.starts_with("Presentation: 4 slides"));
    assert!(report.contains("Risk Factors | 2 bullets"));
}

#[test]
fn test_render_word_document() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("request.json");
    let output = dir.path().join("report.docx");
    fs::write(
        &input,
        r#"{"topic": "Quarterly Report", "docType": "docx", "sections": [
            {"id": 1, "title": "Intro", "content": "Hello"},
            {"id": 2, "title": "Outlook", "content": "Line one\nLine two"}
        ]}"#,
    )
    .unwrap();

    render_command(&input, Some(&output), None).unwrap();

    let bytes = fs::read(&output).unwrap();
    let outline = WordOutline::from_docx(&bytes).unwrap();
    assert_eq!(outline.topic(), Some("Quarterly Report"));
    let titles: Vec<_> = outline.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Intro", "Outlook"]);
    assert_eq!(outline.sections[1].body(), "Line one\nLine two");

    let report = inspect_report(&bytes).unwrap();
    assert!(report.starts_with("Document: Quarterly Report"));
    assert!(report.contains("  - Outlook (2 paragraphs)"));
}

#[test]
fn test_unknown_document_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("request.json");
    fs::write(&input, r#"{"topic": "X", "docType": "pdf", "sections": []}"#).unwrap();

    let err = render_command(&input, None, None).unwrap_err();
    assert!(err.to_string().contains("Invalid render request"));
    assert!(!dir.path().join("X.pdf").exists());
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let err = render_command(&dir.path().join("absent.json"), None, None).unwrap_err();
    assert!(err.to_string().contains("Input file not found"));
}

#[test]
fn test_outline_command_reads_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.txt");
    fs::write(&input, "1. Intro\n2. Costs\n").unwrap();
    outline_command(&input, 2, DocumentType::Word).unwrap();

    assert!(outline_command(&dir.path().join("absent.txt"), 2, DocumentType::Word).is_err());
}

#[test]
fn test_inspect_rejects_foreign_package() {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut buffer);
        zip.start_file("readme.txt", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"not office").unwrap();
        zip.finish().unwrap();
    }

    let err = inspect_report(buffer.get_ref()).unwrap_err();
    assert!(err.to_string().contains("neither"));
}

#[test]
fn test_topic_with_separator_stays_next_to_request() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("request.json");
    fs::write(
        &input,
        r#"{"topic": "AI/ML Trends", "docType": "pptx", "sections": []}"#,
    )
    .unwrap();

    let written = render_command(&input, None, None).unwrap();
    assert_eq!(written, dir.path().join("AI_ML_Trends.pptx"));
    assert!(written.exists());
}

#[test]
fn test_parent_topic_does_not_escape_directory() {
    let dir = TempDir::new().unwrap();
    let jobs = dir.path().join("jobs");
    fs::create_dir(&jobs).unwrap();
    let input = jobs.join("request.json");
    fs::write(
        &input,
        r#"{"topic": "../escaped", "docType": "docx", "sections": []}"#,
    )
    .unwrap();

    let written = render_command(&input, None, None).unwrap();
    assert_eq!(written.parent(), Some(jobs.as_path()));
    assert!(written.exists());
    assert!(!dir.path().join("escaped.docx").exists());
}
