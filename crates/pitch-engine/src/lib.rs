//! pitch-engine - deterministic positioning document generation
//!
//! Turns a finalized [`pitch_core::PositioningInput`] into every derived
//! artifact (statement, pitches, hero copy, matrix, hierarchy), and provides
//! the keyword heuristics used to infer the customer problem.

pub mod generator;
pub mod problem;
pub mod samples;

pub use generator::{generate, DocumentGenerator};
pub use problem::{infer_problem, MatchMode, ProblemMatcher, ProblemRule};
pub use samples::{chat_tool_input, example_input};
