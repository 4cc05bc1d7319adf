//! Integration tests for document generation
//!
//! Covers the shape guarantees of a generated document:
//! - Determinism for unchanged input
//! - Matrix row count and width
//! - Pillar truncation
//! - JSON shape and round trip

use pitch_core::{PositioningDocument, PositioningInput};
use pitch_engine::{chat_tool_input, example_input, generate, DocumentGenerator};

/// Helper to build an input with `n` attributes and `m` value themes
fn input_with(n: usize, m: usize) -> PositioningInput {
    PositioningInput::builder()
        .product_name("Gridwise")
        .competitive_alternatives(["spreadsheets", "Airtable", "Smartsheet"])
        .unique_attributes((1..=n).map(|i| format!("attribute {}", i)))
        .value_themes((1..=m).map(|i| format!("theme {}", i)))
        .target_market("operations leads")
        .market_category("planning workspace")
        .build()
}

#[test]
fn test_generation_is_deterministic() {
    let input = example_input();
    let generator = DocumentGenerator::new(&input);
    assert_eq!(generator.complete_document(), generator.complete_document());
    assert_eq!(generate(&input), generate(&input.clone()));
}

#[test]
fn test_matrix_rows_match_attributes() {
    for n in 1..=6 {
        let doc = generate(&input_with(n, 2));
        assert_eq!(doc.competitive_matrix.rows.len(), n);
        assert!(doc.competitive_matrix.rows.iter().all(|row| row.len() == 4));
        assert_eq!(doc.competitive_matrix.headers.len(), 4);
    }
}

#[test]
fn test_pillars_capped_at_three() {
    for m in 1..=5 {
        let doc = generate(&input_with(2, m));
        assert_eq!(doc.messaging_hierarchy.pillars.len(), m.min(3));
        assert_eq!(doc.messaging_hierarchy.pillars[0], "theme 1");
    }
}

#[test]
fn test_proof_points_unbounded() {
    let doc = generate(&input_with(9, 1));
    assert_eq!(doc.messaging_hierarchy.proof_points.len(), 9);
}

#[test]
fn test_acme_end_to_end() {
    let input = PositioningInput::builder()
        .product_name("Acme")
        .competitive_alternatives(["Excel", "Google Sheets"])
        .unique_attributes(["real-time dashboards"])
        .value_themes(["save time"])
        .target_market("analysts")
        .market_category("BI tool")
        .build();

    let doc = generate(&input);
    assert_eq!(
        doc.positioning_statement,
        "Acme is a BI tool that helps analysts save time. Unlike Excel, Google Sheets, we real-time dashboards."
    );
    assert_eq!(doc.hero_copy.cta, "Get Started");
    assert!(doc
        .elevator_pitch_2min
        .starts_with("You know how analysts struggle with manual, error-prone processes?"));
}

#[test]
fn test_communication_pitch() {
    let doc = generate(&chat_tool_input());
    assert!(doc.elevator_pitch_2min.starts_with(
        "You know how remote product teams struggle with scattered, unorganized communication?"
    ));
    assert_eq!(doc.elevator_pitch_2min.split("\n\n").count(), 5);
}

#[test]
fn test_json_field_names_and_order() {
    let doc = generate(&example_input());
    let json = serde_json::to_string_pretty(&doc).unwrap();

    let keys = [
        "\"productName\"",
        "\"positioningStatement\"",
        "\"elevatorPitch30\"",
        "\"elevatorPitch2Min\"",
        "\"heroCopy\"",
        "\"competitiveMatrix\"",
        "\"messagingHierarchy\"",
        "\"rawData\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| json.find(key).unwrap_or_else(|| panic!("missing {}", key)))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(json.contains("\"topLevel\""));
    assert!(json.contains("\"proofPoints\""));
}

#[test]
fn test_json_round_trip() {
    let doc = generate(&example_input());
    let json = serde_json::to_string_pretty(&doc).unwrap();
    let parsed: PositioningDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, doc);
}
