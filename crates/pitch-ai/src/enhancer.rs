//! Enhancement gateway with per-capability fallbacks
//!
//! Each capability either returns the model's answer or its documented
//! fallback. Failures are logged through `fail_open` and never reach the
//! caller. A gateway built without a provider makes no outbound calls.

use crate::auth;
use crate::client::{CompletionProvider, OpenAiClient};
use crate::prompts;
use crate::types::{Capability, CompletionRequest};
use pitch_core::config::EnhancementConfig;
use pitch_core::fail_open::fail_open;
use pitch_core::{AiSuggestions, PitchError, PositioningDocument, PositioningInput};
use pitch_engine::{infer_problem, DocumentGenerator};

/// Optional language-model enhancement of positioning copy
pub struct Enhancer<P = OpenAiClient> {
    provider: Option<P>,
}

impl Enhancer<OpenAiClient> {
    /// Build from config, enabled only when an API key is available
    pub fn from_config(config: &EnhancementConfig) -> Self {
        match auth::get_api_key(config) {
            Ok(key) => match OpenAiClient::new(config, key) {
                Ok(client) => {
                    tracing::info!("AI enhancement enabled (model {})", client.model());
                    Self::new(client)
                }
                Err(e) => {
                    tracing::warn!("AI enhancement unavailable: {}", e);
                    Self::disabled()
                }
            },
            Err(e) => {
                tracing::debug!("AI enhancement disabled: {}", e);
                Self::disabled()
            }
        }
    }
}

impl<P: CompletionProvider> Enhancer<P> {
    /// Enabled gateway backed by `provider`
    pub fn new(provider: P) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Gateway that always falls back
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    /// Check if AI is enabled
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    async fn ask(&self, capability: Capability, prompt: String) -> Option<String> {
        let provider = self.provider.as_ref()?;
        let request = CompletionRequest::new(capability, prompt);
        fail_open(&capability.to_string(), || async {
            let content = provider.complete(&request).await?;
            if content.is_empty() {
                return Err(PitchError::Enhancement("Empty response".to_string()));
            }
            Ok(content)
        })
        .await
    }

    /// Ask the model for the customer problem; `None` when disabled or failed
    pub async fn try_infer_problem(
        &self,
        target_market: &str,
        alternatives: &[String],
    ) -> Option<String> {
        let prompt = prompts::infer_problem_prompt(target_market, alternatives);
        self.ask(Capability::InferProblem, prompt).await
    }

    /// Infer the customer problem; falls back to the keyword heuristic
    pub async fn infer_problem(&self, target_market: &str, alternatives: &[String]) -> String {
        match self.try_infer_problem(target_market, alternatives).await {
            Some(problem) => problem,
            None => infer_problem(alternatives),
        }
    }

    /// Rewrite a value proposition; falls back to the original text
    pub async fn improve_value_prop(&self, value_prop: &str, target_market: &str) -> String {
        let prompt = prompts::improve_value_prop_prompt(value_prop, target_market);
        self.ask(Capability::ImproveValueProp, prompt)
            .await
            .map(|improved| prompts::strip_quotes(&improved))
            .filter(|improved| !improved.trim().is_empty())
            .unwrap_or_else(|| value_prop.to_string())
    }

    /// Critique a positioning statement; `None` when unavailable
    pub async fn critique_positioning(&self, statement: &str) -> Option<String> {
        self.ask(Capability::CritiquePositioning, prompts::critique_prompt(statement))
            .await
    }

    /// Alternative positioning statements; empty when unavailable
    pub async fn generate_alternatives(
        &self,
        product_name: &str,
        target_market: &str,
        value_theme: &str,
        category: &str,
    ) -> Vec<String> {
        let prompt =
            prompts::alternatives_prompt(product_name, target_market, value_theme, category);
        self.ask(Capability::GenerateAlternatives, prompt)
            .await
            .map(|content| prompts::parse_numbered_list(&content))
            .unwrap_or_default()
    }

    /// Candidate market categories; empty when unavailable
    pub async fn suggest_category(
        &self,
        product_name: &str,
        attributes: &[String],
        value_themes: &[String],
        target_market: &str,
    ) -> Vec<String> {
        let prompt =
            prompts::category_prompt(product_name, attributes, value_themes, target_market);
        self.ask(Capability::SuggestCategory, prompt)
            .await
            .map(|content| prompts::parse_numbered_list(&content))
            .unwrap_or_default()
    }

    /// Run every capability in sequence for one input
    ///
    /// Returns empty suggestions without any calls when disabled.
    pub async fn collect_suggestions(
        &self,
        input: &PositioningInput,
        statement: &str,
    ) -> AiSuggestions {
        if !self.is_enabled() {
            return AiSuggestions::default();
        }

        tracing::info!("Collecting AI suggestions for {}", input.product_name);

        let problem = self
            .try_infer_problem(&input.target_market, &input.competitive_alternatives)
            .await;

        let mut improved_values = Vec::with_capacity(input.value_themes.len());
        for theme in &input.value_themes {
            improved_values.push(self.improve_value_prop(theme, &input.target_market).await);
        }

        let critique = self.critique_positioning(statement).await;

        let alternative_positioning = self
            .generate_alternatives(
                &input.product_name,
                &input.target_market,
                input.value_themes.first().map(String::as_str).unwrap_or(""),
                &input.market_category,
            )
            .await;

        let suggested_categories = self
            .suggest_category(
                &input.product_name,
                &input.unique_attributes,
                &input.value_themes,
                &input.target_market,
            )
            .await;

        AiSuggestions {
            problem,
            improved_values,
            critique,
            alternative_positioning,
            suggested_categories,
        }
    }

    /// Generate the document and collect suggestions alongside it
    ///
    /// Only a problem the model actually answered overrides the 2-minute
    /// pitch; otherwise the generator's own heuristic stands.
    pub async fn build_document(
        &self,
        input: &PositioningInput,
    ) -> (PositioningDocument, AiSuggestions) {
        let generator = DocumentGenerator::new(input);
        let suggestions = self
            .collect_suggestions(input, &generator.positioning_statement())
            .await;
        let doc = generator.complete_document_with_problem(suggestions.problem.as_deref());
        (doc, suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pitch_core::Result;
    use pitch_engine::generate;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Provider returning scripted replies and counting calls
    #[derive(Default)]
    struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String>>>,
        calls: AtomicUsize,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn with(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(PitchError::Enhancement("quota exceeded".to_string())))
        }
    }

    fn alts() -> Vec<String> {
        vec!["Excel".to_string(), "Google Sheets".to_string()]
    }

    #[tokio::test]
    async fn test_disabled_returns_fallbacks() {
        let enhancer: Enhancer<ScriptedProvider> = Enhancer::disabled();
        assert!(!enhancer.is_enabled());

        assert_eq!(
            enhancer.infer_problem("analysts", &alts()).await,
            "struggle with manual, error-prone processes"
        );
        assert_eq!(
            enhancer.improve_value_prop("save time", "analysts").await,
            "save time"
        );
        assert_eq!(enhancer.critique_positioning("Acme is...").await, None);
        assert!(enhancer
            .generate_alternatives("Acme", "analysts", "save time", "BI tool")
            .await
            .is_empty());
        assert!(enhancer
            .suggest_category("Acme", &alts(), &alts(), "analysts")
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_disabled_collects_nothing() {
        let enhancer: Enhancer<ScriptedProvider> = Enhancer::disabled();
        let input = pitch_engine::example_input();
        let suggestions = enhancer.collect_suggestions(&input, "statement").await;
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_failures_fall_back() {
        let enhancer = Enhancer::new(ScriptedProvider::failing());
        assert!(enhancer.is_enabled());

        assert_eq!(
            enhancer.infer_problem("analysts", &["Notion".to_string()]).await,
            "struggle with inefficient workflows using Notion"
        );
        assert_eq!(
            enhancer.improve_value_prop("save time", "analysts").await,
            "save time"
        );
        assert_eq!(enhancer.critique_positioning("Acme is...").await, None);
        assert!(enhancer
            .generate_alternatives("Acme", "analysts", "save time", "BI tool")
            .await
            .is_empty());

        let provider = enhancer.provider.as_ref().unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_model_answers_used() {
        let enhancer = Enhancer::new(ScriptedProvider::with(vec![
            Ok("struggle with reconciling numbers by hand".to_string()),
            Ok("\"Decide in minutes, not days\"".to_string()),
            Ok("- Name the category earlier".to_string()),
            Ok("1. First take\n2. Second take\n3. Third take".to_string()),
        ]));

        assert_eq!(
            enhancer.infer_problem("analysts", &alts()).await,
            "struggle with reconciling numbers by hand"
        );
        assert_eq!(
            enhancer.improve_value_prop("save time", "analysts").await,
            "Decide in minutes, not days"
        );
        assert_eq!(
            enhancer.critique_positioning("Acme is...").await.as_deref(),
            Some("- Name the category earlier")
        );
        assert_eq!(
            enhancer
                .generate_alternatives("Acme", "analysts", "save time", "BI tool")
                .await,
            vec!["First take", "Second take", "Third take"]
        );
    }

    #[tokio::test]
    async fn test_empty_answer_falls_back() {
        let enhancer = Enhancer::new(ScriptedProvider::with(vec![Ok(String::new())]));
        assert_eq!(
            enhancer.infer_problem("analysts", &["nothing".to_string()]).await,
            "struggle with this problem without any solution"
        );
    }

    #[tokio::test]
    async fn test_requests_use_capability_bounds() {
        let enhancer = Enhancer::new(ScriptedProvider::failing());
        enhancer
            .suggest_category("Acme", &alts(), &alts(), "analysts")
            .await;

        let provider = enhancer.provider.as_ref().unwrap();
        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].capability, Capability::SuggestCategory);
        assert_eq!(seen[0].max_tokens, 150);
        assert!(seen[0].prompt.contains("Product: Acme"));
    }

    #[tokio::test]
    async fn test_collect_suggestions_sequence() {
        let input = pitch_engine::chat_tool_input();
        let enhancer = Enhancer::new(ScriptedProvider::with(vec![
            Ok("struggle with decisions lost in threads".to_string()),
            Ok("Find any decision in seconds".to_string()),
            Err(PitchError::Timeout(30)),
            Ok("Looks solid".to_string()),
            Ok("1. Threadline keeps decisions findable".to_string()),
            Ok("1. Decision log\n2. Async meeting replacement".to_string()),
        ]));

        let suggestions = enhancer.collect_suggestions(&input, "statement").await;
        assert_eq!(
            suggestions.problem.as_deref(),
            Some("struggle with decisions lost in threads")
        );
        assert_eq!(
            suggestions.improved_values,
            vec!["Find any decision in seconds", "cut meeting time in half"]
        );
        assert_eq!(suggestions.critique.as_deref(), Some("Looks solid"));
        assert_eq!(
            suggestions.alternative_positioning,
            vec!["Threadline keeps decisions findable"]
        );
        assert_eq!(
            suggestions.suggested_categories,
            vec!["Decision log", "Async meeting replacement"]
        );
    }

    fn founder_input() -> PositioningInput {
        PositioningInput::builder()
            .product_name("Deskmate")
            .competitive_alternatives(["hiring an assistant"])
            .unique_attributes(["inbox triage"])
            .value_themes(["reclaim your mornings"])
            .target_market("founders")
            .market_category("AI assistant")
            .build()
    }

    #[tokio::test]
    async fn test_try_infer_problem_reports_failure() {
        let failing = Enhancer::new(ScriptedProvider::with(vec![Err(PitchError::Timeout(30))]));
        assert_eq!(failing.try_infer_problem("founders", &alts()).await, None);

        let disabled: Enhancer<ScriptedProvider> = Enhancer::disabled();
        assert_eq!(disabled.try_infer_problem("founders", &alts()).await, None);
    }

    #[tokio::test]
    async fn test_failed_gateway_leaves_document_unchanged() {
        let input = founder_input();
        let disabled: Enhancer<ScriptedProvider> = Enhancer::disabled();
        let failing = Enhancer::new(ScriptedProvider::with(vec![Err(PitchError::Timeout(30))]));

        let (disabled_doc, _) = disabled.build_document(&input).await;
        let (failed_doc, suggestions) = failing.build_document(&input).await;

        assert_eq!(failed_doc, disabled_doc);
        assert_eq!(failed_doc, generate(&input));
        assert!(failed_doc
            .elevator_pitch_2min
            .starts_with("You know how founders struggle with inefficient workflows using hiring an assistant?"));
        assert_eq!(suggestions.problem, None);
    }

    #[tokio::test]
    async fn test_answered_problem_overrides_pitch() {
        let input = founder_input();
        let enhancer = Enhancer::new(ScriptedProvider::with(vec![Ok(
            "struggle with drowning in email".to_string(),
        )]));

        let (doc, suggestions) = enhancer.build_document(&input).await;
        assert_eq!(
            suggestions.problem.as_deref(),
            Some("struggle with drowning in email")
        );
        assert!(doc
            .elevator_pitch_2min
            .starts_with("You know how founders struggle with drowning in email?"));
        assert_eq!(doc.positioning_statement, generate(&input).positioning_statement);
    }
}
