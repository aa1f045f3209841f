use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::core::LlmError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("completion provider failed: {0}")]
    Downstream(#[from] LlmError),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    name: String,
    message: String,
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Downstream(LlmError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            ServerError::Downstream(LlmError::ProviderConfiguration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::Downstream(
                LlmError::Network { .. } | LlmError::Api { .. } | LlmError::Parse { .. },
            ) => StatusCode::BAD_GATEWAY,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ServerError::Downstream(LlmError::Timeout { .. }) => "DownstreamTimeout",
            ServerError::Downstream(LlmError::ProviderConfiguration(_)) => "ProviderConfiguration",
            ServerError::Downstream(_) => "DownstreamFailure",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            name: self.name().to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
