use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::render::RenderError;
use crate::store::StoreError;

/// Request-level failures that escape a handler. Validation problems
/// never end up here; they are resolved inside the create handler by
/// redisplaying the form.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                Html(format!(
                    "<!DOCTYPE html><html><head><title>Not Found</title></head>\
                     <body><h1>Not Found</h1><p>{message}</p></body></html>"
                )),
            )
                .into_response(),
            other => {
                // Internal detail goes to the log, not the client.
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(
                        "<!DOCTYPE html><html><head><title>Server Error</title></head>\
                         <body><h1>Server Error</h1><p>Something went wrong.</p></body></html>"
                            .to_string(),
                    ),
                )
                    .into_response()
            }
        }
    }
}
