//! JSON response envelopes.
//!
//! Every response body has a `status` of `success`, `fail` (client error)
//! or `error` (server error), an optional `message` and optional `data`.
//!
//! ```json
//! { "status": "success", "message": "Buku berhasil ditambahkan", "data": { "bookId": "..." } }
//! { "status": "fail", "message": "Buku tidak ditemukan" }
//! ```

use bookshelf_core::{Book, BookSummary};
use serde::Serialize;

/// Envelope status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
    Error,
}

/// Response body wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Success with a payload.
    pub fn success(message: Option<String>, data: T) -> Self {
        Envelope {
            status: ResponseStatus::Success,
            message,
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success with only a message.
    pub fn done(message: impl Into<String>) -> Self {
        Self::message_only(ResponseStatus::Success, message)
    }

    /// Client error.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::message_only(ResponseStatus::Fail, message)
    }

    /// Server error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::message_only(ResponseStatus::Error, message)
    }

    fn message_only(status: ResponseStatus, message: impl Into<String>) -> Self {
        Envelope {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// `data` of a successful create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: String,
}

/// `data` of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// `data` of a single fetch.
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub book: Book,
}
