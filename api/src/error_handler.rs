use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chat_orchestrator::{ChatError, CompletionError};
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("startup wiring failed")]
    Startup(#[source] ChatError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Completion upstream rejected the request; its status is forwarded.
    #[error("upstream completion error: {message}")]
    Upstream {
        status: StatusCode,
        message: String,
    },

    /// Completion upstream answered 2xx with an unusable payload.
    #[error("invalid upstream response: {0}")]
    InvalidUpstream(String),

    /// Catch-all; never exposes internals beyond the message.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // upstream-mapped
            AppError::Upstream { status, .. } => *status,
            AppError::InvalidUpstream(_) => StatusCode::BAD_GATEWAY,

            // 5xx
            AppError::Startup(_)
            | AppError::Bind(_)
            | AppError::Server(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Startup(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::InvalidUpstream(_) => "INVALID_UPSTREAM_RESPONSE",
            AppError::Internal(_) => "INTERNAL",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert orchestration failures into HTTP errors with precise status.
///
/// Retrieval failures never reach this point: the orchestrator swallows
/// them. What arrives here is the fatal side of the error policy.
impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Completion(CompletionError::HttpStatus {
                status, snippet, ..
            }) => AppError::Upstream {
                // reqwest and axum both sit on http 1.x; go through u16 so
                // the crates stay decoupled.
                status: StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                message: snippet,
            },
            ChatError::Completion(CompletionError::InvalidResponseFormat(msg)) => {
                AppError::InvalidUpstream(msg)
            }
            ChatError::Completion(CompletionError::HttpTransport(e)) => AppError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                message: e.to_string(),
            },
            other => AppError::Internal(other.to_string()),
        }
    }
}
