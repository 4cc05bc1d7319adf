//! # pitch-render
//!
//! Presentation of positioning documents: the colored terminal report and
//! the Markdown, plain-text and JSON exports.

pub mod ansi;
mod export;
mod markdown;
mod report;

pub use ansi::strip_ansi;
pub use export::{
    export_filename, export_json, export_text, render, write_export, write_export_dated,
    ExportFormat,
};
pub use markdown::export_markdown;
pub use report::{render_matrix, wrap_text, ReportRenderer};
