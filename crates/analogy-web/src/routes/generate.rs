//! Generation proxy handlers.

use analogy_core::model::{GenerationResult, RawGenerationRequest};
use analogy_core::prompt::CompletionPrompt;
use analogy_core::AnalogyError;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, error, info};

use crate::state::AppState;

type ApiError = (StatusCode, Json<GenerationResult>);

fn internal(e: AnalogyError) -> ApiError {
    error!(error = %e, "Error in generate-analogy");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(GenerationResult::error(e.to_string())),
    )
}

/// POST /generate-analogy
///
/// The credential is checked before the body so a misconfigured proxy fails
/// the same way for every request.
pub async fn generate_analogy(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    let provider = state
        .provider
        .as_ref()
        .ok_or_else(|| internal(AnalogyError::MissingCredential))?;

    let body = body.map_err(|e| internal(AnalogyError::InvalidBody(e.body_text())))?;
    let raw: RawGenerationRequest = serde_json::from_slice(&body)
        .map_err(|e| internal(AnalogyError::InvalidBody(e.to_string())))?;
    let request = raw.validate().map_err(internal)?;

    info!(
        "Generating analogy between \"{}\" and \"{}\"",
        request.thing1, request.thing2
    );

    let prompt = CompletionPrompt::for_request(&request, state.sampling);
    let analogy = provider.complete(&prompt).await.map_err(internal)?;

    debug!(%analogy, "Generated analogy");

    Ok(Json(GenerationResult::analogy(analogy)))
}

/// OPTIONS /generate-analogy - empty pre-flight answer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on the endpoint.
pub async fn method_not_allowed() -> ApiError {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(GenerationResult::error("Method not allowed")),
    )
}
