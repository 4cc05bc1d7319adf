//! File exports: Markdown, plain text and JSON

use crate::ansi::strip_ansi;
use crate::markdown::export_markdown;
use crate::report::ReportRenderer;
use chrono::{NaiveDate, Utc};
use pitch_core::{PitchError, PositioningDocument, Result};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

static WHITESPACE_RUNS: OnceLock<Regex> = OnceLock::new();

fn whitespace_runs() -> &'static Regex {
    WHITESPACE_RUNS.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Text,
    Json,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ExportFormat {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            other => Err(PitchError::ExportFormat(other.to_string())),
        }
    }
}

/// `positioning-{slug}-{date}.{ext}`, the slug being the lowercased product
/// name with whitespace runs replaced by `-`
pub fn export_filename(product_name: &str, date: NaiveDate, format: ExportFormat) -> String {
    let slug = whitespace_runs().replace_all(&product_name.to_lowercase(), "-").into_owned();
    format!(
        "positioning-{}-{}.{}",
        slug,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Pretty-printed JSON with two-space indentation
pub fn export_json(doc: &PositioningDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// The terminal report without styling escapes
pub fn export_text(doc: &PositioningDocument, wrap_width: usize) -> String {
    strip_ansi(&ReportRenderer::new(wrap_width).render(doc))
}

/// Render a document in `format`
pub fn render(doc: &PositioningDocument, format: ExportFormat, wrap_width: usize) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(export_markdown(doc)),
        ExportFormat::Text => Ok(export_text(doc, wrap_width)),
        ExportFormat::Json => export_json(doc),
    }
}

/// Write the export into `dir` under today's (UTC) file name
pub fn write_export(
    doc: &PositioningDocument,
    format: ExportFormat,
    dir: &Path,
    wrap_width: usize,
) -> Result<PathBuf> {
    write_export_dated(doc, format, dir, wrap_width, Utc::now().date_naive())
}

/// Write the export into `dir` using an explicit date
pub fn write_export_dated(
    doc: &PositioningDocument,
    format: ExportFormat,
    dir: &Path,
    wrap_width: usize,
    date: NaiveDate,
) -> Result<PathBuf> {
    let content = render(doc, format, wrap_width)?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(&doc.product_name, date, format));
    std::fs::write(&path, content)?;

    tracing::info!("Exported {} to {}", format, path.display());
    Ok(path)
}
