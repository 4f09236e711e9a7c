use axum::{Json, extract::State};

use crate::AppState;
use crate::data::models::{ServiceError, TranslateRequest, TranslateResponse};
use crate::features::ai::prompts;

/// Translate Arabic text into a structured sign-language description.
/// The completion output is returned verbatim; formatting is entirely the
/// provider's responsibility.
pub async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ServiceError> {
    let completion = state
        .clients
        .completion
        .as_ref()
        .ok_or(ServiceError::NotConfigured)?;
    if payload.text.is_empty() {
        return Err(ServiceError::Validation("No text provided".to_string()));
    }

    let prompt = prompts::translation_prompt(&payload.text);
    let translation = completion.complete(&prompt).await?;

    Ok(Json(TranslateResponse {
        success: true,
        original: payload.text,
        translation,
        model: state.clients.method.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ai::ServiceClients;
    use crate::handlers::test_support::{echo_clients, state_with};

    #[tokio::test]
    async fn unconfigured_service_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(&dir, ServiceClients::disabled());

        let result = translate(
            axum::extract::State(state),
            Json(TranslateRequest {
                text: "صباح الخير".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ServiceError::NotConfigured)));
    }

    #[tokio::test]
    async fn empty_text_is_a_client_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(&dir, echo_clients());

        let result = translate(
            axum::extract::State(state),
            Json(TranslateRequest {
                text: String::new(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn completion_output_is_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(&dir, echo_clients());

        let Json(response) = translate(
            axum::extract::State(state),
            Json(TranslateRequest {
                text: "صباح الخير".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(response.success);
        assert_eq!(response.original, "صباح الخير");
        assert_eq!(response.translation, "وصف الإشارة: صباح الخير");
        assert_eq!(response.model, "Fake");
    }
}
