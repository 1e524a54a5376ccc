pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-prompt", post(handlers::handle_generate_prompt))
        .route("/api/analyze-task", post(handlers::handle_analyze_task))
        .route(
            "/api/generate-task-prompt",
            post(handlers::handle_generate_task_prompt),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GuidanceCatalog, ToneCatalog};
    use crate::llm_client::{ChatBackend, LlmError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubBackend;

    #[async_trait]
    impl ChatBackend for StubBackend {
        async fn chat(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Ok(r#"{
                "systemPrompt": "You are a helpful assistant.",
                "userPrompt": "Summarize [article].",
                "formattingTips": [],
                "behavioralNotes": []
            }"#
            .to_string())
        }
    }

    fn app() -> Router {
        build_router(AppState {
            llm: Arc::new(StubBackend),
            guidance: Arc::new(GuidanceCatalog::new()),
            tones: Arc::new(ToneCatalog::new()),
        })
    }

    async fn post_json(uri: &str, body: &str) -> axum::response::Response {
        app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_model_token_yields_400_error_list() {
        let response = post_json(
            "/api/generate-prompt",
            r#"{"model": "gpt-99", "taskType": "summarization", "tone": "friendly"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid input parameters");
        let errors = body["errors"].as_array().expect("errors must be an array");
        assert!(errors[0]["message"]
            .as_str()
            .expect("error message must be a string")
            .contains("gpt-99"));
    }

    #[tokio::test]
    async fn test_missing_required_field_yields_400_error_list() {
        let response = post_json(
            "/api/generate-prompt",
            r#"{"model": "gpt-4o", "tone": "friendly"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_valid_request_routes_to_generation() {
        let response = post_json(
            "/api/generate-prompt",
            r#"{"model": "gpt-4o", "taskType": "summarization", "tone": "friendly"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["systemPrompt"], "You are a helpful assistant.");
    }

    #[tokio::test]
    async fn test_analyze_task_rejects_unknown_json_shape() {
        let response = post_json("/api/analyze-task", r#"{"taskDescription": 42}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
