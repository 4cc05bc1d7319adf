//! # pitch-core
//!
//! Core types for the pitch positioning document generator.
//!
//! A positioning session collects six framework answers (product name,
//! competitive alternatives, unique attributes, value themes, target market
//! and market category) into a [`PositioningInput`]. Everything downstream
//! works on that finalized value:
//!
//! - `pitch-engine` turns it into a [`PositioningDocument`]
//! - `pitch-ai` optionally produces [`AiSuggestions`] alongside it
//! - `pitch-render` prints and exports the document

pub mod config;
mod error;
pub mod fail_open;
mod types;

pub use config::PitchConfig;
pub use error::{PitchError, Result};
pub use types::*;
