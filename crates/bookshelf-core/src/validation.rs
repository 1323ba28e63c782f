//! # Validation Module
//!
//! Book input validation, run before anything reaches storage.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Book Validation                                    │
//! │                                                                         │
//! │  BookInput                                                              │
//! │       │                                                                 │
//! │       ├── name absent or ""?          → MissingName                    │
//! │       │                                                                 │
//! │       ├── pageCount AND readPage set,                                  │
//! │       │   readPage > pageCount?       → ReadPageExceedsPageCount       │
//! │       │                                                                 │
//! │       └── OK → record builder                                          │
//! │                                                                         │
//! │  An absent page field skips the relational check (absent is not 0).    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookshelf_core::{validate_book, BookInput, ValidationError};
//!
//! let input = BookInput {
//!     name: Some("X".to_string()),
//!     page_count: Some(50),
//!     read_page: Some(60),
//!     ..Default::default()
//! };
//! assert!(matches!(
//!     validate_book(&input),
//!     Err(ValidationError::ReadPageExceedsPageCount { .. })
//! ));
//! ```

use crate::error::ValidationError;
use crate::types::BookInput;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates book input for create and update alike.
///
/// Name is checked first, so input violating both rules reports
/// `MissingName`. Whitespace-only names are accepted; only the empty
/// string counts as missing.
pub fn validate_book(input: &BookInput) -> ValidationResult<()> {
    validate_name(input.name.as_deref())?;
    validate_pages(input.page_count, input.read_page)
}

fn validate_name(name: Option<&str>) -> ValidationResult<()> {
    match name {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingName),
    }
}

fn validate_pages(page_count: Option<u32>, read_page: Option<u32>) -> ValidationResult<()> {
    if let (Some(page_count), Some(read_page)) = (page_count, read_page) {
        if read_page > page_count {
            return Err(ValidationError::ReadPageExceedsPageCount {
                page_count,
                read_page,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> BookInput {
        BookInput {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            validate_book(&BookInput::default()),
            Err(ValidationError::MissingName)
        );
        assert_eq!(validate_book(&named("")), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        assert!(validate_book(&named(" ")).is_ok());
    }

    #[test]
    fn test_read_page_exceeds_page_count() {
        let input = BookInput {
            page_count: Some(50),
            read_page: Some(60),
            ..named("X")
        };
        assert_eq!(
            validate_book(&input),
            Err(ValidationError::ReadPageExceedsPageCount {
                page_count: 50,
                read_page: 60,
            })
        );
    }

    #[test]
    fn test_read_page_equal_or_below_is_ok() {
        for read_page in [0, 99, 100] {
            let input = BookInput {
                page_count: Some(100),
                read_page: Some(read_page),
                ..named("Dune")
            };
            assert!(validate_book(&input).is_ok());
        }
    }

    #[test]
    fn test_absent_page_field_skips_relational_check() {
        let only_read = BookInput {
            read_page: Some(500),
            ..named("Dune")
        };
        assert!(validate_book(&only_read).is_ok());

        let only_count = BookInput {
            page_count: Some(0),
            ..named("Dune")
        };
        assert!(validate_book(&only_count).is_ok());
    }

    #[test]
    fn test_missing_name_reported_before_pages() {
        let input = BookInput {
            page_count: Some(1),
            read_page: Some(2),
            ..Default::default()
        };
        assert_eq!(validate_book(&input), Err(ValidationError::MissingName));
    }
}
