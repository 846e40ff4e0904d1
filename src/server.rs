//! HTTP surface: language catalog and translate endpoints.
//!
//! Request validation lives here, not in the translation core. The core
//! receives identifiers this layer has already checked against the catalog
//! and text within the accepted length bounds.

use crate::languages::{self, Language};
use crate::translator::{TranslationService, FAILURE_MESSAGE};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::warn;

const MIN_TEXT_CHARS: usize = 3;
const MAX_TEXT_CHARS: usize = 200;

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub input: Vec<Language>,
    pub output: Vec<Language>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    pub source: String,
    pub target: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the application router.
pub fn router(service: TranslationService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/languages", get(list_languages))
        .route("/translate", get(translate))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn health() -> &'static str {
    "OK"
}

async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        input: languages::input_languages(),
        output: languages::output_languages(),
    })
}

/// Check query parameters before they reach the translation core.
fn validate(params: &TranslateParams) -> Result<(), String> {
    let chars = params.text.chars().count();
    if chars < MIN_TEXT_CHARS || chars > MAX_TEXT_CHARS {
        return Err(format!(
            "text must be between {} and {} characters",
            MIN_TEXT_CHARS, MAX_TEXT_CHARS
        ));
    }
    if languages::input_name(&params.source).is_none() {
        return Err(format!("unknown source language: {}", params.source));
    }
    if languages::output_name(&params.target).is_none() {
        return Err(format!("unknown target language: {}", params.target));
    }
    Ok(())
}

async fn translate(
    State(service): State<TranslationService>,
    Query(params): Query<TranslateParams>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(error) = validate(&params) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse { error }),
        ));
    }

    let translation = match service
        .translate(&params.source, &params.target, &params.text)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "Translation from {} to {} failed: {}",
                params.source, params.target, e
            );
            FAILURE_MESSAGE.to_string()
        }
    };

    Ok(Json(TranslateResponse { translation }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::{ChatCompletion, Message, TranslateError};
    use async_trait::async_trait;
    use std::sync::Arc;

    // ==================== Test Helpers ====================

    struct StaticCompletion(&'static str);

    #[async_trait]
    impl ChatCompletion for StaticCompletion {
        async fn complete(&self, _messages: &[Message]) -> Result<String, TranslateError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingCompletion;

    #[async_trait]
    impl ChatCompletion for FailingCompletion {
        async fn complete(&self, _messages: &[Message]) -> Result<String, TranslateError> {
            Err(TranslateError::Api {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    fn params(source: &str, target: &str, text: &str) -> TranslateParams {
        TranslateParams {
            source: source.to_string(),
            target: target.to_string(),
            text: text.to_string(),
        }
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_accepts_valid_params() {
        assert!(validate(&params("es", "en", "Hola mundo")).is_ok());
        assert!(validate(&params("auto", "de", "How are you?")).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_text() {
        let err = validate(&params("es", "en", "Ho")).unwrap_err();
        assert!(err.contains("between 3 and 200"));
    }

    #[test]
    fn test_validate_rejects_long_text() {
        let long = "a".repeat(201);
        assert!(validate(&params("es", "en", &long)).is_err());
    }

    #[test]
    fn test_validate_accepts_boundary_lengths() {
        assert!(validate(&params("es", "en", "abc")).is_ok());
        let max = "a".repeat(200);
        assert!(validate(&params("es", "en", &max)).is_ok());
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // Three multi-byte characters are within bounds
        assert!(validate(&params("de", "en", "äöü")).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_source() {
        let err = validate(&params("fr", "en", "Bonjour le monde")).unwrap_err();
        assert!(err.contains("unknown source language: fr"));
    }

    #[test]
    fn test_validate_rejects_auto_as_target() {
        let err = validate(&params("en", "auto", "Hello there")).unwrap_err();
        assert!(err.contains("unknown target language: auto"));
    }

    #[test]
    fn test_validate_rejects_unknown_target() {
        let err = validate(&params("en", "fr", "Hello there")).unwrap_err();
        assert!(err.contains("unknown target language: fr"));
    }

    // ==================== Handler Tests ====================

    #[tokio::test]
    async fn test_list_languages_returns_both_catalogs() {
        let Json(response) = list_languages().await;

        assert_eq!(response.input.len(), 4);
        assert_eq!(response.output.len(), 3);
        assert_eq!(response.input[0].code, "auto");
        assert_eq!(response.output[0].code, "en");
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        assert_eq!(health().await, "OK");
    }

    #[tokio::test]
    async fn test_translate_handler_success() {
        let service = TranslationService::new(Arc::new(StaticCompletion("Hello world")));

        let result = translate(State(service), Query(params("es", "en", "Hola mundo"))).await;

        let Json(response) = result.expect("Should succeed");
        assert_eq!(response.translation, "Hello world");
    }

    #[tokio::test]
    async fn test_translate_handler_maps_failure_to_fixed_message() {
        let service = TranslationService::new(Arc::new(FailingCompletion));

        let result = translate(State(service), Query(params("es", "en", "Hola mundo"))).await;

        let Json(response) = result.expect("Failures map to 200 with fallback text");
        assert_eq!(response.translation, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_translate_handler_rejects_invalid_params() {
        let service = TranslationService::new(Arc::new(StaticCompletion("unused")));

        let result = translate(State(service), Query(params("en", "fr", "Hello there"))).await;

        let (status, Json(body)) = result.expect_err("Should be rejected");
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.error.contains("unknown target language"));
    }

    #[tokio::test]
    async fn test_translate_handler_identity_does_not_call_backend() {
        // A failing backend proves the identity path never reaches it.
        let service = TranslationService::new(Arc::new(FailingCompletion));

        let result = translate(State(service), Query(params("en", "en", "Hello there"))).await;

        let Json(response) = result.expect("Should succeed");
        assert_eq!(response.translation, "Hello there");
    }
}
