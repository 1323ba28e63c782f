//! # Domain Types
//!
//! The Book entity in its three shapes.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Book Shapes                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   BookInput     │   │   BookRecord    │   │      Book       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  caller data    │──►│  + finished     │──►│  + id           │       │
//! │  │  (unvalidated)  │   │  + createdAt    │   │  (as stored)    │       │
//! │  │                 │   │  + updatedAt    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │        builder ──────────────┘   store ──────────────┘                  │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │  BookSummary    │  projected listing: id, name, publisher           │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! JSON uses camelCase keys (`pageCount`, `readPage`, `createdAt`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Book Input
// =============================================================================

/// Book data as supplied by a caller, for create and full-replace update.
///
/// Every field is optional at this level; [`validate_book`] decides what is
/// acceptable. Unknown keys (including a caller-supplied `finished` or `id`)
/// are ignored.
///
/// [`validate_book`]: crate::validation::validate_book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub reading: Option<bool>,
}

// =============================================================================
// Book Record
// =============================================================================

/// A validated book ready to persist, without its id.
///
/// Built by [`crate::record`]; the store assigns the id on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    /// Derived: `page_count == read_page`.
    pub finished: bool,
    pub reading: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Book
// =============================================================================

/// A stored book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub finished: bool,
    pub reading: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Attaches a store-assigned id to a record.
    pub fn from_record(id: impl Into<String>, record: BookRecord) -> Self {
        Book {
            id: id.into(),
            name: record.name,
            year: record.year,
            author: record.author,
            summary: record.summary,
            publisher: record.publisher,
            page_count: record.page_count,
            read_page: record.read_page,
            finished: record.finished,
            reading: record.reading,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Projects this book to its listing shape.
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

// =============================================================================
// Book Summary
// =============================================================================

/// Projected listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
