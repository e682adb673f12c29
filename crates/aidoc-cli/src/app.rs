//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use aidoc_core::{clean_outline, outline_sections, themes};
use aidoc_model::{DocumentType, RenderRequest};
use aidoc_ooxml::{OoxmlArchive, WordOutline};
use aidoc_pptx::deck::names;
use aidoc_pptx::SlideReader;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::load_settings;
use crate::export::export_document;

/// Output format for listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "aidoc")]
#[command(author, version, about = "Themed office documents from generated text", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON request into a .docx or .pptx
    Render {
        /// Request file (topic, sections, docType, theme)
        input: PathBuf,

        /// Output file (defaults to the topic-derived name next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Clean a generated list of titles into JSON sections
    Outline {
        /// Raw generated text
        input: PathBuf,

        /// Number of sections to produce
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// Document type (docx or pptx)
        #[arg(short = 't', long = "type", default_value = "docx")]
        doc_type: DocumentType,
    },

    /// List the available slide themes
    Themes {
        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarise a produced .docx or .pptx
    Inspect {
        /// Document to inspect
        input: PathBuf,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
        } => {
            render_command(&input, output.as_deref(), config.as_deref())?;
        }
        Commands::Outline {
            input,
            count,
            doc_type,
        } => {
            outline_command(&input, count, doc_type)?;
        }
        Commands::Themes { format } => {
            themes_command(format)?;
        }
        Commands::Inspect { input } => {
            inspect_command(&input)?;
        }
    }

    Ok(())
}

/// Install the stderr subscriber; library `log` records are bridged into it
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the render command, returning the written path
pub fn render_command(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<PathBuf> {
    println!("aidoc v{}", aidoc_core::VERSION);
    println!("Rendering: {}", input.display());

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let settings = load_settings(config)?;

    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read request: {}", input.display()))?;
    let request: RenderRequest = serde_json::from_str(&json)
        .with_context(|| format!("Invalid render request: {}", input.display()))?;
    println!(
        "  {} sections -> {}",
        request.sections.len(),
        request.doc_type
    );

    let document = export_document(&request, &settings)?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_file_name(local_file_name(&document.filename)),
    };
    fs::write(&output_path, &document.bytes)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!();
    println!("Render complete!");
    println!("  Output: {}", output_path.display());
    println!("  Size: {} bytes", document.bytes.len());

    Ok(output_path)
}

/// Attachment name made safe to place next to the request: separators are
/// replaced, and a name with nothing but dots before the extension becomes
/// `output.<ext>`.
pub fn local_file_name(filename: &str) -> String {
    let name: String = filename
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let (stem, extension) = name.rsplit_once('.').unwrap_or((name.as_str(), ""));
    if stem.chars().all(|c| c == '.') {
        return format!("output.{}", extension);
    }
    name
}

/// Cleaned sections for a raw outline, as pretty JSON
pub fn outline_json(raw: &str, count: usize, doc_type: DocumentType) -> Result<String> {
    let titles = clean_outline(raw, count, doc_type);
    let sections = outline_sections(&titles);
    serde_json::to_string_pretty(&sections).context("Failed to serialize sections")
}

/// Execute the outline command
pub fn outline_command(input: &Path, count: usize, doc_type: DocumentType) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    println!("{}", outline_json(&raw, count, doc_type)?);
    Ok(())
}

/// The theme registry rendered for display
pub fn themes_listing(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(themes()).context("Failed to serialize themes")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for theme in themes() {
                writeln!(
                    out,
                    "{:<16} {:<18} #{} -> #{}  title #{}  accent #{}",
                    theme.id,
                    theme.name,
                    theme.bg_start.hex(),
                    theme.bg_end.hex(),
                    theme.title_color.hex(),
                    theme.accent_color.hex()
                )?;
            }
            Ok(out)
        }
    }
}

/// Execute the themes command
pub fn themes_command(format: OutputFormat) -> Result<()> {
    print!("{}", themes_listing(format)?);
    Ok(())
}

/// Human-readable summary of a produced document
pub fn inspect_report(bytes: &[u8]) -> Result<String> {
    let archive = OoxmlArchive::from_bytes(bytes).context("Not an OOXML package")?;
    let mut out = String::new();

    if archive.is_presentation() {
        let slides = SlideReader::from_bytes(bytes)?
            .slides()
            .context("Failed to read slides")?;
        writeln!(out, "Presentation: {} slides", slides.len())?;
        for (index, slide) in slides.iter().enumerate() {
            let title = slide.text(names::TITLE).unwrap_or_default();
            let bars: Vec<_> = slide.bars.iter().map(|b| b.name.as_str()).collect();
            let background = slide
                .background
                .as_ref()
                .map(|g| g.stops.join(" -> "))
                .unwrap_or_else(|| "none".to_string());
            writeln!(
                out,
                "  {:>2}. {} | {} bullets | bars: [{}] | background: {}",
                index + 1,
                title,
                slide.bullets.len(),
                bars.join(", "),
                background
            )?;
        }
    } else if archive.is_word() {
        let outline = WordOutline::from_docx(bytes).context("Failed to read document")?;
        writeln!(out, "Document: {}", outline.topics.join(" / "))?;
        for section in &outline.sections {
            writeln!(
                out,
                "  - {} ({} paragraphs)",
                section.title,
                section.paragraphs.len()
            )?;
        }
    } else {
        anyhow::bail!("Package is neither a Word document nor a presentation");
    }

    Ok(out)
}

/// Execute the inspect command
pub fn inspect_command(input: &Path) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read file: {}", input.display()))?;
    print!("{}", inspect_report(&bytes)?);
    Ok(())
}
