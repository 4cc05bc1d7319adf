//! Sample inputs for demos and smoke runs

use pitch_core::PositioningInput;

/// A filled-in analytics product, the input `pitch demo` renders
pub fn example_input() -> PositioningInput {
    PositioningInput::builder()
        .product_name("Acme Analytics")
        .competitive_alternatives(["Excel", "Google Sheets", "hiring a data analyst"])
        .unique_attributes(["real-time dashboards", "no-code setup", "AI-powered insights"])
        .value_themes([
            "make data-driven decisions faster",
            "reduce analytics costs by 80%",
            "empower non-technical teams",
        ])
        .target_market("B2B SaaS companies with 10-100 employees")
        .market_category("business intelligence platform")
        .build()
}

/// A team-chat product whose alternatives hit the communication rules
pub fn chat_tool_input() -> PositioningInput {
    PositioningInput::builder()
        .product_name("Threadline")
        .competitive_alternatives(["email", "Slack"])
        .unique_attributes(["decision log per thread", "async video replies"])
        .value_themes(["keep decisions findable", "cut meeting time in half"])
        .target_market("remote product teams")
        .market_category("async collaboration hub")
        .build()
}
