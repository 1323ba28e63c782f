//! # Bookshelf API
//!
//! HTTP/JSON front end for the book service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Bookshelf API                                   │
//! │                                                                         │
//! │  HTTP request                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────────────┐  │
//! │  │  routes        │──►│  BookService   │──►│  Arc<dyn BookStore>    │  │
//! │  │  (axum)        │   │  (core)        │   │  BookRepository/Memory │  │
//! │  └───────┬────────┘   └────────────────┘   └────────────────────────┘  │
//! │          │ Result<_, ApiError>                                           │
//! │          ▼                                                              │
//! │  Envelope { status, message, data } + status code                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config::ApiConfig`]. Environment variables:
//! - `PORT` - HTTP port (default: 9000)
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `DATABASE_PATH` - SQLite file (default: bookshelf.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT_SECS` - Connection wait (default: 30)
//! - `MAX_BODY_BYTES` - Request body limit (default: 65536)

pub mod config;
pub mod error;
pub mod response;
pub mod routes;

use std::sync::Arc;

use bookshelf_core::{BookService, BookStore};

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub books: BookService<Arc<dyn BookStore>>,
}

impl AppState {
    /// Wraps a store in the book service.
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        AppState {
            books: BookService::new(store),
        }
    }
}
