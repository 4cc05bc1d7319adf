//! # pitch-ai
//!
//! Optional language-model enhancement for positioning documents.
//!
//! The gateway offers five capabilities: infer the customer problem, improve
//! a value proposition, critique the positioning statement, generate
//! alternative statements and suggest market categories.
//!
//! ## Key Pattern
//!
//! Enhancement is advisory. Every capability has a fallback (the keyword
//! heuristic, the unmodified text, `None` or an empty list) that is used when
//! no API key was supplied or when the single request fails. Errors are
//! logged and never propagated to the document build.

mod auth;
mod client;
mod enhancer;
pub mod prompts;
mod types;

pub use auth::get_api_key;
pub use client::{CompletionProvider, OpenAiClient};
pub use enhancer::Enhancer;
pub use types::*;
