use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::explain::types::ErrorBody;

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY manquante dans l'environnement (.env) !")]
    MissingApiKey,
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Anything that went wrong during or after the outbound model call.
///
/// The variants exist for logs only; callers see a single error shape.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("timeout")]
    Timeout,
    #[error("{0}")]
    Transport(String),
    #[error("authentication rejected ({status}): {message}")]
    Auth { status: u16, message: String },
    #[error("{message} (status {status})")]
    Provider { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("response blocked: {0}")]
    Blocked(String),
    #[error("empty response")]
    Empty,
}

impl UpstreamError {
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Timeout => "timeout",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Auth { .. } => "auth",
            UpstreamError::Provider { .. } => "provider",
            UpstreamError::Malformed(_) => "malformed",
            UpstreamError::Blocked(_) => "blocked",
            UpstreamError::Empty => "empty",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::Malformed(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// Per-request failures of `POST /explain`.
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("{0}")]
    InvalidBody(String),
    #[error("text too long: {len} characters (max {max})")]
    TooLarge { len: usize, max: usize },
    #[error("Erreur {provider} : {source}")]
    Upstream {
        provider: String,
        #[source]
        source: UpstreamError,
    },
}

impl ExplainError {
    pub fn status(&self) -> StatusCode {
        match self {
            ExplainError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ExplainError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ExplainError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ExplainError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
