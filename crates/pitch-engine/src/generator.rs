//! Template-based document generation
//!
//! Every artifact is a pure formatting function of the finalized input.
//! Lists are indexed at their first element in several templates; a missing
//! element interpolates as empty text rather than failing.

use crate::problem::ProblemMatcher;
use pitch_core::{
    CompetitiveMatrix, HeroCopy, MessagingHierarchy, PositioningDocument, PositioningInput,
};

const CTA: &str = "Get Started";
const CHECK: &str = "✓";
const CROSS: &str = "✗";
const MATRIX_ALTERNATIVES: usize = 2;
const HERO_THEMES: usize = 3;
const PILLARS: usize = 3;

fn first(items: &[String]) -> &str {
    items.first().map(String::as_str).unwrap_or("")
}

fn leading(items: &[String], n: usize) -> &[String] {
    &items[..items.len().min(n)]
}

/// Builds positioning artifacts from one input
#[derive(Debug, Clone, Copy)]
pub struct DocumentGenerator<'a> {
    input: &'a PositioningInput,
}

impl<'a> DocumentGenerator<'a> {
    pub fn new(input: &'a PositioningInput) -> Self {
        Self { input }
    }

    /// One-sentence positioning statement
    pub fn positioning_statement(&self) -> String {
        let input = self.input;
        format!(
            "{} is a {} that helps {} {}. Unlike {}, we {}.",
            input.product_name,
            input.market_category,
            input.target_market,
            first(&input.value_themes),
            input.competitive_alternatives.join(", "),
            first(&input.unique_attributes)
        )
    }

    /// 30-second elevator pitch
    pub fn elevator_pitch_30(&self) -> String {
        let input = self.input;
        format!(
            "{} helps {} {}. We're the only {} that {}.",
            input.product_name,
            input.target_market,
            first(&input.value_themes),
            input.market_category,
            first(&input.unique_attributes)
        )
    }

    /// 2-minute elevator pitch, five paragraphs
    ///
    /// `problem` replaces the elevator-pitch heuristic when given. A leading
    /// "struggle with " is dropped from it since the template already says so.
    pub fn elevator_pitch_2min(&self, problem: Option<&str>) -> String {
        let input = self.input;
        let problem = match problem {
            Some(problem) => {
                let problem = problem.trim();
                problem
                    .strip_prefix("struggle with ")
                    .unwrap_or(problem)
                    .to_string()
            }
            None => ProblemMatcher::ELEVATOR_PITCH.infer(&input.competitive_alternatives),
        };

        format!(
            "You know how {market} struggle with {problem}?\n\
             \n\
             Most companies use {alternative}, but that approach has limitations.\n\
             \n\
             {product} is a {category} that solves this differently. We {attributes}.\n\
             \n\
             This means {themes}.\n\
             \n\
             We're built specifically for {market} who need {theme}.",
            market = input.target_market,
            problem = problem,
            alternative = first(&input.competitive_alternatives),
            product = input.product_name,
            category = input.market_category,
            attributes = input.unique_attributes.join(", and we "),
            themes = input.value_themes.join(", "),
            theme = first(&input.value_themes),
        )
    }

    /// Website hero copy
    pub fn hero_copy(&self) -> HeroCopy {
        let input = self.input;
        HeroCopy {
            headline: format!("{} for {}", first(&input.value_themes), input.target_market),
            subheadline: format!(
                "{} helps you {}",
                input.product_name,
                leading(&input.value_themes, HERO_THEMES).join(", ")
            ),
            cta: CTA.to_string(),
        }
    }

    /// Feature comparison against the first two alternatives
    ///
    /// Rows always mark three comparison columns, even when fewer or more
    /// than two alternatives appear in the headers.
    pub fn competitive_matrix(&self) -> CompetitiveMatrix {
        let input = self.input;
        let mut headers = vec!["Feature".to_string(), input.product_name.clone()];
        headers.extend_from_slice(leading(&input.competitive_alternatives, MATRIX_ALTERNATIVES));

        let rows = input
            .unique_attributes
            .iter()
            .map(|attribute| {
                vec![
                    attribute.clone(),
                    CHECK.to_string(),
                    CROSS.to_string(),
                    CROSS.to_string(),
                ]
            })
            .collect();

        CompetitiveMatrix { headers, rows }
    }

    /// Top-level claim, up to three pillars, every attribute as proof
    pub fn messaging_hierarchy(&self) -> MessagingHierarchy {
        let input = self.input;
        MessagingHierarchy {
            top_level: first(&input.value_themes).to_string(),
            pillars: leading(&input.value_themes, PILLARS).to_vec(),
            proof_points: input.unique_attributes.clone(),
        }
    }

    /// Assemble the full document using the heuristic problem
    pub fn complete_document(&self) -> PositioningDocument {
        self.complete_document_with_problem(None)
    }

    /// Assemble the full document, optionally overriding the pitch problem
    pub fn complete_document_with_problem(&self, problem: Option<&str>) -> PositioningDocument {
        tracing::debug!(
            product = %self.input.product_name,
            problem_override = problem.is_some(),
            "Generating positioning document"
        );

        PositioningDocument {
            product_name: self.input.product_name.clone(),
            positioning_statement: self.positioning_statement(),
            elevator_pitch_30: self.elevator_pitch_30(),
            elevator_pitch_2min: self.elevator_pitch_2min(problem),
            hero_copy: self.hero_copy(),
            competitive_matrix: self.competitive_matrix(),
            messaging_hierarchy: self.messaging_hierarchy(),
            raw_data: self.input.clone(),
        }
    }
}

/// Generate the complete document for `input`
pub fn generate(input: &PositioningInput) -> PositioningDocument {
    DocumentGenerator::new(input).complete_document()
}
