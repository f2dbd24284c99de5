use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info, warn};

use crate::{
    error::ExplainError,
    explain::types::{ExplainRequest, ExplainResponse},
    prompts,
    state::AppState,
};

pub async fn explain(
    State(state): State<AppState>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, ExplainError> {
    let Json(req) = payload.map_err(|e| ExplainError::InvalidBody(e.body_text()))?;

    let len = req.text.chars().count();
    let max = state.config.max_input_chars;
    if len > max {
        warn!(input_chars = len, max_chars = max, "explain request rejected: too long");
        return Err(ExplainError::TooLarge { len, max });
    }

    info!(input_chars = len, "explain request accepted");

    let prompt = prompts::explain_prompt(&req.text);
    let raw = state.generator.generate(&prompt).await.map_err(|source| {
        warn!(
            error_kind = source.kind(),
            error = %source,
            "upstream generation failed"
        );
        ExplainError::Upstream {
            provider: state.config.provider_name.clone(),
            source,
        }
    })?;

    let explanation = raw.trim().to_string();
    debug!(output_chars = explanation.chars().count(), "explain request served");

    Ok(Json(ExplainResponse { explanation }))
}
