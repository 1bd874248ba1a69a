use crate::startup::AppState;
use anyhow::anyhow;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub text: String,
}

/// Relay a caller prompt to the configured text provider.
///
/// The prompt is substituted into the process-configured template and sent
/// upstream exactly once; the generated text (or the upstream failure
/// message) is returned as JSON.
pub async fn relay(
    State(state): State<AppState>,
    Json(req): Json<RelayRequest>,
) -> Result<impl IntoResponse, AppError> {
    let prompt = match req.prompt.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(AppError::BadRequest(anyhow!("Prompt required"))),
    };

    let rendered = state.template.render(prompt);

    tracing::debug!(prompt_len = prompt.len(), "Relaying prompt to text provider");

    let text = state.text_provider.generate(&rendered).await.map_err(|e| {
        tracing::error!(error = %e, "Text provider call failed");
        AppError::from(e)
    })?;

    Ok((StatusCode::OK, Json(RelayResponse { text })))
}
