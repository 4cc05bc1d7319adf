//! Type definitions for enhancement requests

use serde::{Deserialize, Serialize};

/// The five enhancement capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    InferProblem,
    ImproveValueProp,
    CritiquePositioning,
    GenerateAlternatives,
    SuggestCategory,
}

impl Capability {
    /// Sampling temperature; alternative generation is the most exploratory
    pub fn temperature(&self) -> f32 {
        match self {
            Capability::InferProblem | Capability::ImproveValueProp => 0.7,
            Capability::CritiquePositioning | Capability::SuggestCategory => 0.8,
            Capability::GenerateAlternatives => 0.9,
        }
    }

    /// Upper bound on generated tokens
    pub fn max_tokens(&self) -> u32 {
        match self {
            Capability::InferProblem => 100,
            Capability::ImproveValueProp => 50,
            Capability::CritiquePositioning => 200,
            Capability::GenerateAlternatives => 300,
            Capability::SuggestCategory => 150,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::InferProblem => write!(f, "infer_problem"),
            Capability::ImproveValueProp => write!(f, "improve_value_prop"),
            Capability::CritiquePositioning => write!(f, "critique_positioning"),
            Capability::GenerateAlternatives => write!(f, "generate_alternatives"),
            Capability::SuggestCategory => write!(f, "suggest_category"),
        }
    }
}

/// A single-turn completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub capability: Capability,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build a request with the capability's sampling bounds
    pub fn new(capability: Capability, prompt: impl Into<String>) -> Self {
        Self {
            capability,
            prompt: prompt.into(),
            temperature: capability.temperature(),
            max_tokens: capability.max_tokens(),
        }
    }
}

/// Token usage information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Chat completions message format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat completions request format
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Chat completions response format
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    pub usage: Option<Usage>,
}

/// One choice in a chat completions response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_bounds() {
        assert_eq!(Capability::InferProblem.max_tokens(), 100);
        assert_eq!(Capability::ImproveValueProp.max_tokens(), 50);
        assert_eq!(Capability::GenerateAlternatives.temperature(), 0.9);
        assert!(
            Capability::InferProblem.temperature() < Capability::GenerateAlternatives.temperature()
        );
    }

    #[test]
    fn test_request_uses_capability_bounds() {
        let request = CompletionRequest::new(Capability::SuggestCategory, "prompt");
        assert_eq!(request.temperature, 0.8);
        assert_eq!(request.max_tokens, 150);
    }

    #[test]
    fn test_parse_chat_response() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": " hello "}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, " hello ");
        assert_eq!(response.usage.unwrap().completion_tokens, 3);
    }
}
