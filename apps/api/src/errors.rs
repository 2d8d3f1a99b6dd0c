use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Exa search failed: {0}")]
    SearchFailed(String),

    #[error("Failed to fetch LinkedIn: {0}")]
    ProfileFetch(String),

    #[error("Language model request failed: {0}")]
    Llm(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::SearchFailed(msg) => {
                tracing::error!("Search error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ProfileFetch(msg) => {
                tracing::error!("Profile fetch error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_search_failure_embeds_upstream_message() {
        let (status, body) = render(AppError::SearchFailed("timeout".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Exa search failed: timeout");
    }

    #[tokio::test]
    async fn test_profile_fetch_failure_detail() {
        let (status, body) = render(AppError::ProfileFetch("no results".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Failed to fetch LinkedIn: no results");
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let (status, body) = render(AppError::Validation("unknown university 'MIT'".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Invalid request: unknown university 'MIT'");
    }

    #[tokio::test]
    async fn test_llm_failure_is_server_error() {
        let (status, body) = render(AppError::Llm("status 401".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Language model request failed: status 401");
    }
}
