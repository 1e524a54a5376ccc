//! Axum route handlers for the prompt generation API.
//!
//! Handlers are thin: validate input shape, delegate to the analyzer or
//! builder + gateway, and return either the result or a typed error.

use axum::{extract::State, Json};

use crate::analyzer;
use crate::errors::{AppError, AppJson, FieldError};
use crate::generation::builder::{build, build_task_first};
use crate::generation::gateway::complete;
use crate::models::prompt::{
    ModelRecommendation, PromptRequest, PromptResponse, TaskAnalysisRequest,
    TaskFirstPromptRequest, TaskType,
};
use crate::state::AppState;

/// Minimum trimmed length of a task description.
const MIN_TASK_DESCRIPTION_CHARS: usize = 10;

/// POST /api/analyze-task
///
/// Classifies a free-text task description and recommends a model.
/// Pure heuristic — no external API call.
pub async fn handle_analyze_task(
    State(_state): State<AppState>,
    AppJson(request): AppJson<TaskAnalysisRequest>,
) -> Result<Json<ModelRecommendation>, AppError> {
    validate_task_description(&request.task_description)?;

    Ok(Json(analyzer::analyze(&request.task_description)))
}

/// POST /api/generate-prompt
///
/// Classic flow: enumerated model/taskType/tone (plus optional custom
/// prompt) → instruction builder → completion gateway.
pub async fn handle_generate_prompt(
    State(state): State<AppState>,
    AppJson(request): AppJson<PromptRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    if request.task_type == TaskType::Other {
        let blank = request
            .custom_prompt
            .as_deref()
            .map(|text| text.trim().is_empty())
            .unwrap_or(true);
        if blank {
            return Err(AppError::InvalidInput(vec![FieldError::new(
                "customPrompt",
                "customPrompt is required when taskType is \"other\"",
            )]));
        }
    }

    let instructions = build(&request, &state.guidance, &state.tones);
    let response = complete(state.llm.as_ref(), &instructions).await?;

    Ok(Json(response))
}

/// POST /api/generate-task-prompt
///
/// Task-first flow: free-text task plus a confirmed model and tone
/// (usually after /api/analyze-task) → instruction pair → gateway.
pub async fn handle_generate_task_prompt(
    State(state): State<AppState>,
    AppJson(request): AppJson<TaskFirstPromptRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    validate_task_description(&request.task_description)?;

    let instructions = build_task_first(&request, &state.guidance, &state.tones);
    let response = complete(state.llm.as_ref(), &instructions).await?;

    Ok(Json(response))
}

fn validate_task_description(description: &str) -> Result<(), AppError> {
    if description.trim().chars().count() < MIN_TASK_DESCRIPTION_CHARS {
        return Err(AppError::InvalidInput(vec![FieldError::new(
            "taskDescription",
            format!("taskDescription must be at least {MIN_TASK_DESCRIPTION_CHARS} characters"),
        )]));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GuidanceCatalog, ToneCatalog};
    use crate::llm_client::{ChatBackend, LlmError};
    use crate::models::prompt::{ModelId, TaskComplexity, Tone};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StubBackend {
        reply: String,
    }

    #[async_trait]
    impl ChatBackend for StubBackend {
        async fn chat(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Ok(self.reply.clone())
        }
    }

    fn state_with_reply(reply: &str) -> AppState {
        AppState {
            llm: Arc::new(StubBackend {
                reply: reply.to_string(),
            }),
            guidance: Arc::new(GuidanceCatalog::new()),
            tones: Arc::new(ToneCatalog::new()),
        }
    }

    const CONFORMING_REPLY: &str = r#"{
        "systemPrompt": "You are a helpful assistant.",
        "userPrompt": "Summarize [article] for [audience].",
        "formattingTips": ["Use bullets"],
        "behavioralNotes": ["Keeps answers short"]
    }"#;

    #[tokio::test]
    async fn test_analyze_task_returns_recommendation() {
        let state = state_with_reply(CONFORMING_REPLY);
        let Json(recommendation) = handle_analyze_task(
            State(state),
            AppJson(TaskAnalysisRequest {
                task_description: "Prove this mathematical theorem using formal logic".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(recommendation.recommended_model, ModelId::O3);
        assert_eq!(recommendation.task_complexity, TaskComplexity::Complex);
    }

    #[tokio::test]
    async fn test_analyze_task_rejects_short_description() {
        let state = state_with_reply(CONFORMING_REPLY);
        let error = handle_analyze_task(
            State(state),
            AppJson(TaskAnalysisRequest {
                task_description: "too short".to_string(),
            }),
        )
        .await
        .unwrap_err();

        match error {
            AppError::InvalidInput(fields) => {
                assert_eq!(fields[0].field, "taskDescription");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_prompt_other_without_custom_prompt_is_field_error() {
        let state = state_with_reply(CONFORMING_REPLY);
        let error = handle_generate_prompt(
            State(state),
            AppJson(PromptRequest {
                model: ModelId::Gpt4o,
                task_type: TaskType::Other,
                tone: Tone::Friendly,
                custom_prompt: Some("".to_string()),
            }),
        )
        .await
        .unwrap_err();

        match error {
            AppError::InvalidInput(fields) => {
                assert_eq!(fields[0].field, "customPrompt");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_prompt_returns_upstream_fields_unchanged() {
        let state = state_with_reply(CONFORMING_REPLY);
        let Json(response) = handle_generate_prompt(
            State(state),
            AppJson(PromptRequest {
                model: ModelId::Gpt41,
                task_type: TaskType::CodeExplanation,
                tone: Tone::Technical,
                custom_prompt: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.system_prompt, "You are a helpful assistant.");
        assert_eq!(response.user_prompt, "Summarize [article] for [audience].");
        assert_eq!(response.formatting_tips, vec!["Use bullets"]);
        assert_eq!(response.behavioral_notes, vec!["Keeps answers short"]);
    }

    #[tokio::test]
    async fn test_generate_prompt_propagates_malformed_reply() {
        let state = state_with_reply("not json at all");
        let error = handle_generate_prompt(
            State(state),
            AppJson(PromptRequest {
                model: ModelId::Gpt4o,
                task_type: TaskType::Summarization,
                tone: Tone::Friendly,
                custom_prompt: None,
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, AppError::MalformedReply(_)));
    }

    #[tokio::test]
    async fn test_generate_task_prompt_happy_path() {
        let state = state_with_reply(CONFORMING_REPLY);
        let Json(response) = handle_generate_task_prompt(
            State(state),
            AppJson(TaskFirstPromptRequest {
                task_description: "Write engaging social media posts for my coffee shop"
                    .to_string(),
                selected_model: ModelId::Gpt45,
                tone: Tone::Playful,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.formatting_tips.len(), 1);
    }

    #[tokio::test]
    async fn test_generate_task_prompt_rejects_short_description() {
        let state = state_with_reply(CONFORMING_REPLY);
        let error = handle_generate_task_prompt(
            State(state),
            AppJson(TaskFirstPromptRequest {
                task_description: "short".to_string(),
                selected_model: ModelId::Gpt4o,
                tone: Tone::Friendly,
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, AppError::InvalidInput(_)));
    }
}
