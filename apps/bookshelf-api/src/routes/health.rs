//! `/healthz`: reports whether the store answers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

use crate::error::ApiError;
use crate::response::Envelope;
use crate::AppState;

/// GET /healthz
pub async fn healthz(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.books.health().await.map_err(|e| {
        warn!(error = %e, "Health check failed");
        ApiError::Unavailable("Penyimpanan tidak tersedia".to_string())
    })?;

    Ok(Json(Envelope::done("Server berjalan normal")))
}
