use axum::{Json, extract::State};
use serde::Deserialize;

use crate::gateway::CompletionGateway;

use super::error::ServerError;

/// Body of `POST /api/ai/ask`.
///
/// Keys other than `prompt` are accepted and ignored.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    pub prompt: Option<String>,
}

/// Returns the completion as a plain-text body.
#[tracing::instrument(name = "POST /api/ai/ask", skip_all)]
pub async fn ask(
    State(gateway): State<CompletionGateway>,
    Json(request): Json<AskRequest>,
) -> Result<String, ServerError> {
    Ok(gateway.ask(request.prompt).await?)
}
