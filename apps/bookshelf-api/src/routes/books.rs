//! `/books` handlers.
//!
//! Each handler extracts its input, calls one `BookService` operation and
//! wraps the outcome in an [`Envelope`]. Failures come back as [`ApiError`]
//! tagged with the [`BookAction`] that picks their wording.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookshelf_core::BookInput;

use crate::error::{ApiError, BookAction};
use crate::response::{BookDetail, BookList, CreatedBook, Envelope};
use crate::AppState;

type BookBody = Result<Json<BookInput>, JsonRejection>;

/// Unwraps the body. A request without a JSON content type reads as `{}`,
/// leaving validation to report what is missing.
fn book_input(action: BookAction, body: BookBody) -> Result<BookInput, ApiError> {
    match body {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(BookInput::default()),
        Err(rejection) => Err(ApiError::malformed_body(action, &rejection)),
    }
}

/// POST /books
pub async fn add_book(
    State(state): State<AppState>,
    body: BookBody,
) -> Result<impl IntoResponse, ApiError> {
    let input = book_input(BookAction::Add, body)?;

    let book_id = state
        .books
        .create_book(&input)
        .await
        .map_err(|e| ApiError::from_core(BookAction::Add, e))?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(
            Some("Buku berhasil ditambahkan".to_string()),
            CreatedBook { book_id },
        )),
    ))
}

/// GET /books
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let books = state
        .books
        .list_books()
        .await
        .map_err(|e| ApiError::from_core(BookAction::Show, e))?;

    Ok(Json(Envelope::success(None, BookList { books })))
}

/// GET /books/:book_id
pub async fn show_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let book = state
        .books
        .get_book(&book_id)
        .await
        .map_err(|e| ApiError::from_core(BookAction::Show, e))?;

    Ok(Json(Envelope::success(None, BookDetail { book })))
}

/// PUT /books/:book_id
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: BookBody,
) -> Result<impl IntoResponse, ApiError> {
    let input = book_input(BookAction::Update, body)?;

    state
        .books
        .update_book(&book_id, &input)
        .await
        .map_err(|e| ApiError::from_core(BookAction::Update, e))?;

    Ok(Json(Envelope::done("Buku berhasil diperbarui")))
}

/// DELETE /books/:book_id
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .books
        .delete_book(&book_id)
        .await
        .map_err(|e| ApiError::from_core(BookAction::Delete, e))?;

    Ok(Json(Envelope::done("Buku berhasil dihapus")))
}
