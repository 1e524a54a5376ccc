//! Wire-level data model for the prompt generation API.
//!
//! All request/response bodies use camelCase field names to match the
//! web client. Everything here is a per-request transient — nothing is
//! persisted.

use serde::{Deserialize, Serialize};

/// Closed set of target model identifiers the catalog knows about.
/// The serialized token doubles as the catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "gpt-4.5")]
    Gpt45,
    #[serde(rename = "gpt-4.1")]
    Gpt41,
    #[serde(rename = "gpt-4.1-mini")]
    Gpt41Mini,
    #[serde(rename = "o3")]
    O3,
    #[serde(rename = "o4-mini")]
    O4Mini,
    #[serde(rename = "o1")]
    O1,
    #[serde(rename = "o1-mini")]
    O1Mini,
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5")]
    Gpt35,
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    #[serde(rename = "gpt-3.5-turbo-instruct")]
    Gpt35TurboInstruct,
}

impl ModelId {
    /// The wire token, also used as the guidance catalog key and in
    /// outbound instruction text.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gpt4o => "gpt-4o",
            ModelId::Gpt45 => "gpt-4.5",
            ModelId::Gpt41 => "gpt-4.1",
            ModelId::Gpt41Mini => "gpt-4.1-mini",
            ModelId::O3 => "o3",
            ModelId::O4Mini => "o4-mini",
            ModelId::O1 => "o1",
            ModelId::O1Mini => "o1-mini",
            ModelId::Gpt4Turbo => "gpt-4-turbo",
            ModelId::Gpt4 => "gpt-4",
            ModelId::Gpt35 => "gpt-3.5",
            ModelId::Gpt4oMini => "gpt-4o-mini",
            ModelId::Gpt35TurboInstruct => "gpt-3.5-turbo-instruct",
        }
    }
}

/// Task categories offered by the form. `Other` is a sentinel meaning
/// "use the free-text customPrompt instead".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    Summarization,
    CodeExplanation,
    EmailWriting,
    LegalReasoning,
    DataExtraction,
    MultimodalReasoning,
    CreativeWriting,
    SqlGeneration,
    JsonFormatting,
    MathLogicProofs,
    ChatbotConversations,
    Other,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Summarization => "summarization",
            TaskType::CodeExplanation => "code-explanation",
            TaskType::EmailWriting => "email-writing",
            TaskType::LegalReasoning => "legal-reasoning",
            TaskType::DataExtraction => "data-extraction",
            TaskType::MultimodalReasoning => "multimodal-reasoning",
            TaskType::CreativeWriting => "creative-writing",
            TaskType::SqlGeneration => "sql-generation",
            TaskType::JsonFormatting => "json-formatting",
            TaskType::MathLogicProofs => "math-logic-proofs",
            TaskType::ChatbotConversations => "chatbot-conversations",
            TaskType::Other => "other",
        }
    }
}

/// Stylistic modifier selected by the user. The tone catalog carries a
/// few extra entries beyond these (professional, casual, persuasive);
/// "professional" is the lookup fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Friendly,
    Formal,
    Technical,
    Direct,
    Playful,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Technical => "technical",
            Tone::Direct => "direct",
            Tone::Playful => "playful",
        }
    }
}

/// Complexity tier assigned by the task analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskComplexity {
    Simple,
    Moderate,
    Complex,
}

/// Body of POST /api/generate-prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub model: ModelId,
    pub task_type: TaskType,
    pub tone: Tone,
    /// Required and non-blank when `task_type` is `Other`; optional
    /// (triggers the optimize-existing-prompt flow) everywhere else.
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

/// Body of POST /api/analyze-task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalysisRequest {
    pub task_description: String,
}

/// Body of POST /api/generate-task-prompt (task-first workflow).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFirstPromptRequest {
    pub task_description: String,
    pub selected_model: ModelId,
    pub tone: Tone,
}

/// One non-recommended roster model surfaced alongside a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelAlternative {
    pub model: ModelId,
    pub reason: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Output of the task analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecommendation {
    pub recommended_model: ModelId,
    /// Heuristic confidence in [0, 1].
    pub confidence: f32,
    pub reasoning: String,
    pub task_complexity: TaskComplexity,
    /// At most 3 entries; never contains `recommended_model`.
    pub alternatives: Vec<ModelAlternative>,
}

/// The contract the upstream completion reply must satisfy. Validated
/// by the gateway and returned to the client unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub system_prompt: String,
    pub user_prompt: String,
    pub formatting_tips: Vec<String>,
    pub behavioral_notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_serde_tokens_round_trip() {
        for (token, id) in [
            ("gpt-4o", ModelId::Gpt4o),
            ("gpt-4.5", ModelId::Gpt45),
            ("gpt-4.1", ModelId::Gpt41),
            ("gpt-4.1-mini", ModelId::Gpt41Mini),
            ("o3", ModelId::O3),
            ("o4-mini", ModelId::O4Mini),
            ("o1", ModelId::O1),
            ("o1-mini", ModelId::O1Mini),
            ("gpt-4-turbo", ModelId::Gpt4Turbo),
            ("gpt-4", ModelId::Gpt4),
            ("gpt-3.5", ModelId::Gpt35),
            ("gpt-4o-mini", ModelId::Gpt4oMini),
            ("gpt-3.5-turbo-instruct", ModelId::Gpt35TurboInstruct),
        ] {
            let json = format!("\"{token}\"");
            let parsed: ModelId = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, id);
            assert_eq!(parsed.as_str(), token);
            assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
        }
    }

    #[test]
    fn test_task_type_kebab_tokens() {
        let parsed: TaskType = serde_json::from_str("\"math-logic-proofs\"").unwrap();
        assert_eq!(parsed, TaskType::MathLogicProofs);
        assert_eq!(parsed.as_str(), "math-logic-proofs");

        let other: TaskType = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(other, TaskType::Other);
    }

    #[test]
    fn test_unknown_model_token_is_rejected() {
        let result: Result<ModelId, _> = serde_json::from_str("\"gpt-99\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_prompt_request_camel_case_wire_names() {
        let json = r#"{
            "model": "gpt-4o",
            "taskType": "summarization",
            "tone": "friendly",
            "customPrompt": "Summarize my notes"
        }"#;
        let request: PromptRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.model, ModelId::Gpt4o);
        assert_eq!(request.task_type, TaskType::Summarization);
        assert_eq!(request.tone, Tone::Friendly);
        assert_eq!(request.custom_prompt.as_deref(), Some("Summarize my notes"));
    }

    #[test]
    fn test_prompt_request_custom_prompt_defaults_to_none() {
        let json = r#"{"model": "o3", "taskType": "math-logic-proofs", "tone": "technical"}"#;
        let request: PromptRequest = serde_json::from_str(json).unwrap();
        assert!(request.custom_prompt.is_none());
    }

    #[test]
    fn test_prompt_response_serializes_camel_case() {
        let response = PromptResponse {
            system_prompt: "You are a helpful assistant.".to_string(),
            user_prompt: "Summarize [article title].".to_string(),
            formatting_tips: vec!["Use bullet points".to_string()],
            behavioral_notes: vec![],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("systemPrompt").is_some());
        assert!(value.get("userPrompt").is_some());
        assert!(value.get("formattingTips").is_some());
        assert!(value.get("behavioralNotes").is_some());
    }

    #[test]
    fn test_task_complexity_lowercase_tokens() {
        assert_eq!(
            serde_json::to_string(&TaskComplexity::Complex).unwrap(),
            "\"complex\""
        );
        let parsed: TaskComplexity = serde_json::from_str("\"simple\"").unwrap();
        assert_eq!(parsed, TaskComplexity::Simple);
    }
}
