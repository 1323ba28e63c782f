//! # Record Builder
//!
//! Turns validated [`BookInput`] into the [`BookRecord`] that gets persisted.
//!
//! ## What Gets Derived
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Record Building                                    │
//! │                                                                         │
//! │  Create:  build_new(input, now)                                        │
//! │           createdAt = updatedAt = now                                   │
//! │                                                                         │
//! │  Update:  build_replacement(input, created_at, now)                    │
//! │           createdAt kept, updatedAt = now                               │
//! │           every other field from input (omitted → absent)               │
//! │                                                                         │
//! │  Both:    finished = (pageCount == readPage)                            │
//! │           None == None is true: a book with neither field set is       │
//! │           "finished". Kept as-is for compatibility.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The builder never generates ids and never reads the clock; the caller
//! passes `now`.

use chrono::{DateTime, Utc};

use crate::types::{BookInput, BookRecord};

/// Computes the derived `finished` flag.
#[inline]
pub fn is_finished(page_count: Option<u32>, read_page: Option<u32>) -> bool {
    page_count == read_page
}

/// Builds the record for a new book.
pub fn build_new(input: &BookInput, now: DateTime<Utc>) -> BookRecord {
    assemble(input, now, now)
}

/// Builds the full replacement for an existing book.
pub fn build_replacement(
    input: &BookInput,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> BookRecord {
    assemble(input, created_at, now)
}

fn assemble(input: &BookInput, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> BookRecord {
    BookRecord {
        // Validation guarantees a name; default only keeps the builder total.
        name: input.name.clone().unwrap_or_default(),
        year: input.year,
        author: input.author.clone(),
        summary: input.summary.clone(),
        publisher: input.publisher.clone(),
        page_count: input.page_count,
        read_page: input.read_page,
        finished: is_finished(input.page_count, input.read_page),
        reading: input.reading,
        created_at,
        updated_at,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_finished_equality() {
        assert!(is_finished(Some(100), Some(100)));
        assert!(!is_finished(Some(100), Some(99)));
        assert!(!is_finished(Some(100), None));
        assert!(!is_finished(None, Some(0)));
        // Absent is not coerced to zero.
        assert!(!is_finished(Some(0), None));
        assert!(is_finished(None, None));
    }

    #[test]
    fn test_build_new_stamps_both_timestamps() {
        let input = BookInput {
            name: Some("Dune".to_string()),
            year: Some(1965),
            author: Some("Frank Herbert".to_string()),
            page_count: Some(100),
            read_page: Some(100),
            reading: Some(false),
            ..Default::default()
        };

        let record = build_new(&input, t0());

        assert_eq!(record.name, "Dune");
        assert_eq!(record.year, Some(1965));
        assert_eq!(record.author.as_deref(), Some("Frank Herbert"));
        assert!(record.finished);
        assert_eq!(record.reading, Some(false));
        assert_eq!(record.created_at, t0());
        assert_eq!(record.updated_at, t0());
    }

    #[test]
    fn test_build_replacement_keeps_created_at_and_drops_omitted_fields() {
        let later = t0() + Duration::hours(3);
        let input = BookInput {
            name: Some("Dune Messiah".to_string()),
            page_count: Some(300),
            read_page: Some(10),
            ..Default::default()
        };

        let record = build_replacement(&input, t0(), later);

        assert_eq!(record.name, "Dune Messiah");
        assert_eq!(record.created_at, t0());
        assert_eq!(record.updated_at, later);
        assert_eq!(record.author, None);
        assert_eq!(record.publisher, None);
        assert_eq!(record.reading, None);
        assert!(!record.finished);
    }
}
