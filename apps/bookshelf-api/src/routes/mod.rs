//! HTTP routes.
//!
//! ```text
//! POST   /books            add_book
//! GET    /books            list_books
//! GET    /books/:book_id   show_book
//! PUT    /books/:book_id   update_book
//! DELETE /books/:book_id   delete_book
//! GET    /healthz          healthz
//! *                         fallback (404 / 405 envelope)
//! ```

pub mod books;
pub mod fallback;
pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the application router.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            "/healthz",
            get(health::healthz).fallback(fallback::method_not_allowed),
        )
        .route(
            "/books",
            get(books::list_books)
                .post(books::add_book)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/books/:book_id",
            get(books::show_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(fallback::method_not_allowed),
        )
        .fallback(fallback::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
