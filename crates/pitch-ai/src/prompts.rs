//! Prompt templates and response parsing for each capability

/// Prompt for inferring the target market's problem
pub fn infer_problem_prompt(target_market: &str, alternatives: &[String]) -> String {
    format!(
        "You are a product marketing expert. Based on the following information, infer the main problem that the target market is experiencing.\n\
         \n\
         Target Market: {}\n\
         Competitive Alternatives: {}\n\
         \n\
         Respond with a concise problem statement (one sentence, no quotes). Focus on the pain point, not the solution.\n\
         \n\
         Example format: \"struggle with manual, time-consuming data entry that causes errors\"",
        target_market,
        alternatives.join(", ")
    )
}

/// Prompt for rewriting one value proposition
pub fn improve_value_prop_prompt(value_prop: &str, target_market: &str) -> String {
    format!(
        "You are a product marketing expert. Improve this value proposition to be more customer-centric and outcome-focused.\n\
         \n\
         Original Value Prop: {}\n\
         Target Market: {}\n\
         \n\
         Rules:\n\
         - Focus on outcomes, not features\n\
         - Use active voice\n\
         - Be specific and concrete\n\
         - Keep it under 15 words\n\
         - Don't use buzzwords\n\
         \n\
         Respond with ONLY the improved value proposition, no explanation.",
        value_prop, target_market
    )
}

/// Prompt for critiquing a positioning statement
pub fn critique_prompt(statement: &str) -> String {
    format!(
        "You are April Dunford, positioning expert. Critique this positioning statement and provide 1-2 specific improvements.\n\
         \n\
         Positioning Statement: {}\n\
         \n\
         Provide constructive feedback in 2-3 bullet points. Be specific and actionable.",
        statement
    )
}

/// Prompt for three alternative positioning statements
pub fn alternatives_prompt(
    product_name: &str,
    target_market: &str,
    value_theme: &str,
    category: &str,
) -> String {
    format!(
        "Generate 3 alternative positioning statement variations for:\n\
         \n\
         Product: {}\n\
         Target Market: {}\n\
         Main Value: {}\n\
         Category: {}\n\
         \n\
         Each variation should emphasize a different angle (outcome-focused, differentiation-focused, category-focused).\n\
         \n\
         Format:\n\
         1. [positioning statement]\n\
         2. [positioning statement]\n\
         3. [positioning statement]",
        product_name, target_market, value_theme, category
    )
}

/// Prompt for three candidate market categories
pub fn category_prompt(
    product_name: &str,
    attributes: &[String],
    value_themes: &[String],
    target_market: &str,
) -> String {
    format!(
        "You are a positioning strategist. Suggest 3 possible market categories for this product.\n\
         \n\
         Product: {}\n\
         Unique Attributes: {}\n\
         Value Themes: {}\n\
         Target Market: {}\n\
         \n\
         Suggest 3 market categories that would make the value obvious to the target market. Be specific (not just \"SaaS\" or \"platform\").\n\
         \n\
         Format:\n\
         1. [category name]\n\
         2. [category name]\n\
         3. [category name]",
        product_name,
        attributes.join(", "),
        value_themes.join(", "),
        target_market
    )
}

/// Extract items from a "1. ...", "2. ..." formatted response
///
/// Only lines that begin with digits and a period are kept; everything else
/// (preamble, blank lines, indented text) is ignored.
pub fn parse_numbered_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let digits = line.chars().take_while(char::is_ascii_digit).count();
            if digits == 0 {
                return None;
            }
            line[digits..].strip_prefix('.')
        })
        .map(|rest| rest.trim().to_string())
        .collect()
}

/// Remove quote characters models like to wrap short answers in
pub fn strip_quotes(text: &str) -> String {
    text.chars().filter(|c| *c != '\'' && *c != '"').collect()
}
