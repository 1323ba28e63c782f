//! Error types for the HTTP layer.
//!
//! ## Status Mapping
//! ```text
//! CoreError::Validation    → 400 "fail"   "<action prefix>. <reason>"
//! malformed JSON body      → 400 "fail"   "<action prefix>. Format data buku tidak valid"
//! CoreError::BookNotFound  → 404 "fail"   per-action message
//! CoreError::Storage       → 500 "error"  generic message, detail logged
//! health probe failure     → 503 "error"
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookshelf_core::CoreError;
use tracing::{error, warn};

use crate::response::Envelope;

/// Message returned for every server-side failure.
pub const SERVER_ERROR_MESSAGE: &str = "Terjadi kesalahan pada server";

/// The book operation a request was performing; picks the failure wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Add,
    Show,
    Update,
    Delete,
}

impl BookAction {
    fn failure_prefix(self) -> &'static str {
        match self {
            BookAction::Add => "Gagal menambahkan buku",
            BookAction::Show => "Gagal menampilkan buku",
            BookAction::Update => "Gagal memperbarui buku",
            BookAction::Delete => "Buku gagal dihapus",
        }
    }

    fn not_found_message(self) -> String {
        match self {
            BookAction::Show => "Buku tidak ditemukan".to_string(),
            other => format!("{}. Id tidak ditemukan", other.failure_prefix()),
        }
    }
}

/// HTTP API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Carries the internal detail for logs; never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Maps a core error raised while performing `action`.
    pub fn from_core(action: BookAction, err: CoreError) -> Self {
        match err {
            CoreError::Validation(reason) => {
                ApiError::BadRequest(format!("{}. {}", action.failure_prefix(), reason))
            }
            CoreError::BookNotFound(_) => ApiError::NotFound(action.not_found_message()),
            CoreError::Storage(e) => {
                error!(?action, error = %e, "Storage operation failed");
                ApiError::Internal(e.to_string())
            }
        }
    }

    /// Maps a body that could not be read as book JSON.
    pub fn malformed_body(action: BookAction, rejection: &JsonRejection) -> Self {
        warn!(?action, reason = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(format!(
            "{}. Format data buku tidak valid",
            action.failure_prefix()
        ))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => Envelope::fail(msg),
            ApiError::Internal(_) => Envelope::error(SERVER_ERROR_MESSAGE),
            ApiError::Unavailable(msg) => Envelope::error(msg),
        };
        (status, Json(body)).into_response()
    }
}
