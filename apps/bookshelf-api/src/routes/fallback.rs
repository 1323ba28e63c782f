//! Answers for requests no route handles, so they still get an envelope.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::Envelope;

/// Unknown path.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::fail("Halaman tidak ditemukan")),
    )
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::fail("Metode tidak diizinkan")),
    )
}
