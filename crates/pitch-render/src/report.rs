//! Colored terminal report for a positioning document

use colored::Colorize;
use pitch_core::{AiSuggestions, CompetitiveMatrix, PositioningDocument};

const RULE_WIDTH: usize = 70;
const DEFAULT_WRAP_WIDTH: usize = 65;

/// Renders documents for the terminal
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    wrap_width: usize,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_WIDTH)
    }
}

impl ReportRenderer {
    pub fn new(wrap_width: usize) -> Self {
        Self { wrap_width }
    }

    /// Render the document report
    pub fn render(&self, doc: &PositioningDocument) -> String {
        self.render_with_suggestions(doc, None)
    }

    /// Render the document report, appending AI suggestions when present
    pub fn render_with_suggestions(
        &self,
        doc: &PositioningDocument,
        suggestions: Option<&AiSuggestions>,
    ) -> String {
        let width = self.wrap_width;
        let rule = "═".repeat(RULE_WIDTH);
        let mut lines: Vec<String> = Vec::new();

        lines.push(rule.cyan().to_string());
        lines.push(
            "           POSITIONING STATEMENT           "
                .cyan()
                .bold()
                .to_string(),
        );
        lines.push(rule.cyan().to_string());
        lines.push(String::new());

        lines.push(format!("📦 {}", doc.product_name).white().bold().to_string());
        lines.push(String::new());

        lines.push("🎯 Core Positioning Statement:".yellow().bold().to_string());
        lines.push(wrap_text(&doc.positioning_statement, width).white().to_string());
        lines.push(String::new());

        lines.push("⏱️  30-Second Elevator Pitch:".green().bold().to_string());
        lines.push(wrap_text(&doc.elevator_pitch_30, width).white().to_string());
        lines.push(String::new());

        lines.push("⏱️  2-Minute Elevator Pitch:".green().bold().to_string());
        for line in doc.elevator_pitch_2min.split('\n') {
            lines.push(wrap_text(line.trim(), width).white().to_string());
        }
        lines.push(String::new());

        lines.push("🌟 Website Hero Copy:".magenta().bold().to_string());
        lines.push(format!("  Headline: {}", doc.hero_copy.headline).white().to_string());
        lines.push(
            format!("  Subheadline: {}", doc.hero_copy.subheadline)
                .white()
                .to_string(),
        );
        lines.push(format!("  CTA: {}", doc.hero_copy.cta).white().to_string());
        lines.push(String::new());

        lines.push("📊 Competitive Positioning Matrix:".blue().bold().to_string());
        lines.push(render_matrix(&doc.competitive_matrix));
        lines.push(String::new());

        let hierarchy = &doc.messaging_hierarchy;
        lines.push("🏗️  Messaging Hierarchy:".cyan().bold().to_string());
        lines.push(
            format!("  Top-Level Narrative: {}", hierarchy.top_level)
                .white()
                .to_string(),
        );
        lines.push("  Pillar Messages:".white().to_string());
        push_numbered(&mut lines, &hierarchy.pillars, "    ");
        lines.push("  Proof Points:".white().to_string());
        push_numbered(&mut lines, &hierarchy.proof_points, "    ");
        lines.push(String::new());

        if let Some(suggestions) = suggestions.filter(|s| !s.is_empty()) {
            push_suggestions(&mut lines, suggestions, width);
        }

        lines.push(rule.cyan().to_string());

        lines.join("\n")
    }
}

fn push_numbered(lines: &mut Vec<String>, items: &[String], indent: &str) {
    for (i, item) in items.iter().enumerate() {
        lines.push(format!("{}{}. {}", indent, i + 1, item).white().to_string());
    }
}

fn push_suggestions(lines: &mut Vec<String>, suggestions: &AiSuggestions, width: usize) {
    lines.push("🤖 AI Suggestions:".bright_magenta().bold().to_string());

    if let Some(problem) = &suggestions.problem {
        lines.push(format!("  Inferred Problem: {}", problem).white().to_string());
    }
    if !suggestions.improved_values.is_empty() {
        lines.push("  Improved Value Themes:".white().to_string());
        push_numbered(lines, &suggestions.improved_values, "    ");
    }
    if let Some(critique) = &suggestions.critique {
        lines.push("  Critique:".white().to_string());
        for line in critique.lines() {
            lines.push(format!("    {}", wrap_text(line.trim(), width)).white().to_string());
        }
    }
    if !suggestions.alternative_positioning.is_empty() {
        lines.push("  Alternative Positioning:".white().to_string());
        push_numbered(lines, &suggestions.alternative_positioning, "    ");
    }
    if !suggestions.suggested_categories.is_empty() {
        lines.push("  Suggested Categories:".white().to_string());
        push_numbered(lines, &suggestions.suggested_categories, "    ");
    }
    lines.push(String::new());
}

/// Greedy word wrap
///
/// A word joins the current line while the line's length plus the word's
/// length (the joining space is not counted) stays within `width`.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        if current.chars().count() + word.chars().count() <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Box-drawn matrix table
///
/// The column count is the widest of the header row and the data rows, so
/// four-cell rows under three headers still render every mark.
pub fn render_matrix(matrix: &CompetitiveMatrix) -> String {
    let columns = matrix
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(matrix.headers.len()))
        .max()
        .unwrap_or(0);

    let cell = |row: &[String], i: usize| row.get(i).cloned().unwrap_or_default();

    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            std::iter::once(&matrix.headers)
                .chain(matrix.rows.iter())
                .map(|row| cell(row.as_slice(), i).chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
            .bright_black()
            .to_string()
    };

    let format_row = |row: &[String], header: bool| {
        let bar = "│".bright_black().to_string();
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let text = cell(row, i);
                let padding = " ".repeat(w - text.chars().count());
                let text = if header {
                    text.bold().to_string()
                } else {
                    text
                };
                format!(" {}{} ", text, padding)
            })
            .collect();
        format!("{}{}{}", bar, cells.join(bar.as_str()), bar)
    };

    let mut lines = vec![border("┌", "┬", "┐"), format_row(matrix.headers.as_slice(), true)];
    lines.push(border("├", "┼", "┤"));
    for row in &matrix.rows {
        lines.push(format_row(row.as_slice(), false));
    }
    lines.push(border("└", "┴", "┘"));

    lines.join("\n")
}
