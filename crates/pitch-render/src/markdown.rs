//! Markdown export

use pitch_core::PositioningDocument;

const ATTRIBUTION: [&str; 2] = [
    "> Generated with pitch, the positioning statement generator",
    "> Based on April Dunford's \"Obviously Awesome\" framework",
];

/// Render a document as a Markdown page
pub fn export_markdown(doc: &PositioningDocument) -> String {
    let mut md: Vec<String> = Vec::new();
    let mut push = |line: String| md.push(line);

    push(format!("# {} - Positioning Statement", doc.product_name));
    push(String::new());
    for line in ATTRIBUTION {
        push(line.to_string());
    }
    push(String::new());

    push("## 🎯 Core Positioning Statement".to_string());
    push(String::new());
    push(doc.positioning_statement.clone());
    push(String::new());

    push("## ⏱️ Elevator Pitches".to_string());
    push(String::new());
    push("### 30-Second Version".to_string());
    push(String::new());
    push(doc.elevator_pitch_30.clone());
    push(String::new());
    push("### 2-Minute Version".to_string());
    push(String::new());
    push(doc.elevator_pitch_2min.clone());
    push(String::new());

    let hero = &doc.hero_copy;
    push("## 🌟 Website Hero Copy".to_string());
    push(String::new());
    push(format!("**Headline:** {}", hero.headline));
    push(String::new());
    push(format!("**Subheadline:** {}", hero.subheadline));
    push(String::new());
    push(format!("**CTA:** {}", hero.cta));
    push(String::new());

    let matrix = &doc.competitive_matrix;
    let columns = matrix.headers.iter().skip(1);
    push("## 📊 Competitive Positioning Matrix".to_string());
    push(String::new());
    push(pipe_row(
        std::iter::once("Feature").chain(columns.clone().map(String::as_str)),
    ));
    push(pipe_row(std::iter::once("---").chain(columns.map(|_| "---"))));
    for row in &matrix.rows {
        push(pipe_row(row.iter().map(String::as_str)));
    }
    push(String::new());

    let hierarchy = &doc.messaging_hierarchy;
    push("## 🏗️ Messaging Hierarchy".to_string());
    push(String::new());
    push(format!("**Top-Level Narrative:** {}", hierarchy.top_level));
    push(String::new());
    push("**Pillar Messages:**".to_string());
    for (i, pillar) in hierarchy.pillars.iter().enumerate() {
        push(format!("{}. {}", i + 1, pillar));
    }
    push(String::new());
    push("**Proof Points:**".to_string());
    for (i, point) in hierarchy.proof_points.iter().enumerate() {
        push(format!("{}. {}", i + 1, point));
    }
    push(String::new());

    push("---".to_string());
    push(String::new());

    let raw = &doc.raw_data;
    push("## 📋 Raw Framework Data".to_string());
    push(String::new());
    for (label, items) in [
        ("Competitive Alternatives", &raw.competitive_alternatives),
        ("Unique Attributes", &raw.unique_attributes),
        ("Value Themes", &raw.value_themes),
    ] {
        push(format!("**{}:**", label));
        for item in items {
            push(format!("- {}", item));
        }
        push(String::new());
    }
    push(format!("**Target Market:** {}", raw.target_market));
    push(String::new());
    push(format!("**Market Category:** {}", raw.market_category));

    md.join("\n")
}

fn pipe_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}
