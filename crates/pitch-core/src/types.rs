//! Core type definitions for positioning documents

use serde::{Deserialize, Serialize};

use crate::{PitchError, Result};

/// The six framework answers a document is built from
///
/// Construct with [`PositioningInput::builder`]; the builder owns the value
/// while the session fills it in and hands it out once finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningInput {
    pub product_name: String,
    /// What customers would use if the product didn't exist
    pub competitive_alternatives: Vec<String>,
    /// Capabilities the alternatives lack
    pub unique_attributes: Vec<String>,
    /// Value the unique attributes enable
    pub value_themes: Vec<String>,
    /// Who cares most about that value
    pub target_market: String,
    /// Category that makes the value obvious
    pub market_category: String,
}

impl PositioningInput {
    /// Start building an input
    pub fn builder() -> PositioningInputBuilder {
        PositioningInputBuilder::default()
    }

    /// Check that every field is populated
    ///
    /// Generation does not require this; empty fields interpolate as empty
    /// text. Returns the first missing field in prompt order.
    pub fn validate(&self) -> Result<()> {
        let missing = if self.product_name.trim().is_empty() {
            Some("productName")
        } else if self.competitive_alternatives.is_empty() {
            Some("competitiveAlternatives")
        } else if self.unique_attributes.is_empty() {
            Some("uniqueAttributes")
        } else if self.value_themes.is_empty() {
            Some("valueThemes")
        } else if self.target_market.trim().is_empty() {
            Some("targetMarket")
        } else if self.market_category.trim().is_empty() {
            Some("marketCategory")
        } else {
            None
        };

        match missing {
            Some(field) => Err(PitchError::InputValidation(field.to_string())),
            None => Ok(()),
        }
    }
}

/// Owned builder for [`PositioningInput`]
#[derive(Debug, Clone, Default)]
pub struct PositioningInputBuilder {
    input: PositioningInput,
}

impl PositioningInputBuilder {
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.input.product_name = name.into();
        self
    }

    pub fn competitive_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.competitive_alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }

    pub fn unique_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.unique_attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn value_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.value_themes = themes.into_iter().map(Into::into).collect();
        self
    }

    pub fn target_market(mut self, market: impl Into<String>) -> Self {
        self.input.target_market = market.into();
        self
    }

    pub fn market_category(mut self, category: impl Into<String>) -> Self {
        self.input.market_category = category.into();
        self
    }

    /// Finish building
    pub fn build(self) -> PositioningInput {
        self.input
    }
}

/// Website hero section copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
}

/// Feature comparison table
///
/// Rows always carry four cells (attribute plus three marks), whatever the
/// number of headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitiveMatrix {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Top claim, supporting pillars and proof points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingHierarchy {
    pub top_level: String,
    pub pillars: Vec<String>,
    pub proof_points: Vec<String>,
}

/// Every derived artifact for one product, plus the input it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningDocument {
    pub product_name: String,
    pub positioning_statement: String,
    #[serde(rename = "elevatorPitch30")]
    pub elevator_pitch_30: String,
    #[serde(rename = "elevatorPitch2Min")]
    pub elevator_pitch_2min: String,
    pub hero_copy: HeroCopy,
    pub competitive_matrix: CompetitiveMatrix,
    pub messaging_hierarchy: MessagingHierarchy,
    pub raw_data: PositioningInput,
}

/// Advisory output of the enhancement gateway, kept apart from the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestions {
    pub problem: Option<String>,
    pub improved_values: Vec<String>,
    pub critique: Option<String>,
    pub alternative_positioning: Vec<String>,
    pub suggested_categories: Vec<String>,
}

impl AiSuggestions {
    /// True when no capability produced anything
    pub fn is_empty(&self) -> bool {
        self.problem.is_none()
            && self.improved_values.is_empty()
            && self.critique.is_none()
            && self.alternative_positioning.is_empty()
            && self.suggested_categories.is_empty()
    }
}
