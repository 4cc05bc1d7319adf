//! Interactive framework prompts
//!
//! Walks the user through the six framework answers in order, re-asking on
//! empty answers, then offers the export menu.

use anyhow::{bail, Result};
use colored::Colorize;
use pitch_core::PositioningInput;
use pitch_render::ExportFormat;
use std::io::{BufRead, Write};

/// Split a comma-separated answer, trimming items and dropping empty ones
pub fn parse_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question.bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed before all answers were given");
        }
        Ok(line.trim().to_string())
    }

    fn reject(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", format!("  ✗ {}", message).red())?;
        Ok(())
    }

    fn step(&mut self, title: &str, hint: &str) -> Result<()> {
        writeln!(self.output, "{}", title.cyan().bold())?;
        writeln!(self.output, "{}", hint.bright_black())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn captured(&mut self, what: &str) -> Result<()> {
        writeln!(self.output, "{}", format!("\n✓ {}\n", what).green())?;
        Ok(())
    }

    /// Ask until a non-empty answer is given
    pub fn ask_text(&mut self, question: &str, required: &str) -> Result<String> {
        loop {
            let answer = self.read_answer(question)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.reject(required)?;
        }
    }

    /// Ask until at least one comma-separated item is given
    pub fn ask_list(&mut self, question: &str, required: &str) -> Result<Vec<String>> {
        loop {
            let items = parse_list(&self.read_answer(question)?);
            if !items.is_empty() {
                return Ok(items);
            }
            self.reject(required)?;
        }
    }

    /// Run the full framework interview
    pub fn collect_input(&mut self) -> Result<PositioningInput> {
        let product_name =
            self.ask_text("📦 What's your product name?", "Product name is required")?;
        self.captured("Product name set")?;

        self.step(
            "Step 1: Competitive Alternatives",
            "What would customers use if you didn't exist?",
        )?;
        let alternatives = self.ask_list(
            "🔄 List competitive alternatives (comma-separated):",
            "At least one alternative is required",
        )?;
        self.captured("Competitive alternatives captured")?;

        self.step(
            "Step 2: Unique Attributes",
            "What features/capabilities do you have that alternatives don't?",
        )?;
        let attributes = self.ask_list(
            "⭐ List unique attributes (comma-separated):",
            "At least one attribute is required",
        )?;
        self.captured("Unique attributes captured")?;

        self.step(
            "Step 3: Value Themes",
            "What value do those unique attributes enable?",
        )?;
        let themes = self.ask_list(
            "💎 List value themes (comma-separated):",
            "At least one value theme is required",
        )?;
        self.captured("Value themes captured")?;

        self.step("Step 4: Target Market", "Who cares most about this value?")?;
        let market = self.ask_text(
            "🎯 Describe your target market:",
            "Target market is required",
        )?;
        self.captured("Target market captured")?;

        self.step(
            "Step 5: Market Category",
            "What market category makes your value obvious?",
        )?;
        let category = self.ask_text(
            "📊 What market category are you in?",
            "Market category is required",
        )?;
        self.captured("Market category captured")?;

        Ok(PositioningInput::builder()
            .product_name(product_name)
            .competitive_alternatives(alternatives)
            .unique_attributes(attributes)
            .value_themes(themes)
            .target_market(market)
            .market_category(category)
            .build())
    }

    /// Offer the export menu; `None` means skip
    pub fn choose_export(&mut self) -> Result<Option<ExportFormat>> {
        writeln!(self.output, "{}", "💾 Export your positioning document?".bold())?;
        writeln!(self.output, "  1) Markdown (.md)")?;
        writeln!(self.output, "  2) Text (.txt)")?;
        writeln!(self.output, "  3) JSON (.json)")?;
        writeln!(self.output, "  4) Skip export")?;

        loop {
            let answer = self.read_answer("Choose 1-4:")?;
            let choice = match answer.to_lowercase().as_str() {
                "1" => Some(Some(ExportFormat::Markdown)),
                "2" => Some(Some(ExportFormat::Text)),
                "3" => Some(Some(ExportFormat::Json)),
                "4" | "skip" | "none" => Some(None),
                other => other.parse::<ExportFormat>().ok().map(Some),
            };
            match choice {
                Some(format) => return Ok(format),
                None => self.reject("Pick a number between 1 and 4")?,
            }
        }
    }
}
