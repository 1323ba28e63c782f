//! # Error Types
//!
//! Domain-specific error types for bookshelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookshelf-core errors (this file)                                     │
//! │  ├── ValidationError  - Rejected book input (client caused)           │
//! │  ├── StoreError       - What a BookStore reports                       │
//! │  └── CoreError        - What BookService returns                       │
//! │                                                                         │
//! │  bookshelf-db errors (separate crate)                                  │
//! │  └── DbError          - sqlx failures, converted into StoreError       │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - Status code + JSON envelope                    │
//! │                                                                         │
//! │  Flow: DbError → StoreError → CoreError → ApiError → HTTP response     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation messages are the user-facing reason texts. The HTTP layer
//! prefixes them with the failed operation ("Gagal menambahkan buku. ...").

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Book input rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `name` is absent or the empty string.
    #[error("Mohon isi nama buku")]
    MissingName,

    /// Both page fields were supplied and `readPage > pageCount`.
    #[error("readPage tidak boleh lebih besar dari pageCount")]
    ReadPageExceedsPageCount { page_count: u32, read_page: u32 },
}

// =============================================================================
// Store Error
// =============================================================================

/// Errors reported by a [`BookStore`](crate::store::BookStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id (never existed or already deleted).
    #[error("Book not found: {id}")]
    NotFound { id: String },

    /// The backing engine could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Any other failure inside the backing engine.
    #[error("Storage operation failed: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by [`BookService`](crate::service::BookService).
///
/// ## Status Mapping (done by the HTTP layer)
/// ```text
/// Validation(_)    → 400 "fail"
/// BookNotFound(_)  → 404 "fail"
/// Storage(_)       → 500 "error" (detail logged, never returned)
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested book does not exist.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// The store failed.
    #[error("Storage error: {0}")]
    Storage(StoreError),
}

/// Store lookups that miss become `BookNotFound`; everything else is a
/// storage failure.
impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => CoreError::BookNotFound(id),
            other => CoreError::Storage(other),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
