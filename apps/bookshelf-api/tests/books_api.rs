//! End-to-end tests for the `/books` routes, driven through the router
//! with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_api::{router, AppState};
use bookshelf_core::MemoryBookStore;
use bookshelf_db::{Database, DbConfig};

const BODY_LIMIT: usize = 64 * 1024;

fn memory_app() -> (Router, Arc<MemoryBookStore>) {
    let store = Arc::new(MemoryBookStore::new());
    let app = router(AppState::new(store.clone()), BODY_LIMIT);
    (app, store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn create(app: &Router, body: Value) -> String {
    let (status, value) = send(app, Method::POST, "/books", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{value}");
    value["data"]["bookId"].as_str().unwrap().to_string()
}

fn full_book() -> Value {
    json!({
        "name": "Dune",
        "year": 1965,
        "author": "Frank Herbert",
        "summary": "Spice and sand",
        "publisher": "Chilton",
        "pageCount": 100,
        "readPage": 100,
        "reading": false
    })
}

#[tokio::test]
async fn create_returns_201_and_stores_finished() {
    let (app, _) = memory_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "name": "Dune", "pageCount": 100, "readPage": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil ditambahkan");
    let id = body["data"]["bookId"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"]["finished"], true);
}

#[tokio::test]
async fn create_rejects_read_page_over_page_count() {
    let (app, store) = memory_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "name": "X", "pageCount": 50, "readPage": 60 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_rejects_missing_or_empty_name() {
    let (app, store) = memory_app();

    for body in [json!({ "pageCount": 10 }), json!({ "name": "" }), json!({ "name": null })] {
        let (status, value) = send(&app, Method::POST, "/books", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["status"], "fail");
        assert_eq!(value["message"], "Gagal menambahkan buku. Mohon isi nama buku");
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_ignores_caller_supplied_finished() {
    let (app, _) = memory_app();
    let id = create(
        &app,
        json!({ "name": "Emma", "pageCount": 400, "readPage": 3, "finished": true }),
    )
    .await;

    let (_, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
    assert_eq!(body["data"]["book"]["finished"], false);
}

#[tokio::test]
async fn malformed_body_is_a_client_failure() {
    let (app, store) = memory_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "Gagal menambahkan buku. Format data buku tidak valid"
    );

    let (status, _) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "name": "X", "pageCount": -5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn get_round_trips_every_field() {
    let (app, _) = memory_app();
    let id = create(&app, full_book()).await;

    let (status, body) = send(&app, Method::GET, &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let book = &body["data"]["book"];
    assert_eq!(book["id"], id.as_str());
    for key in ["name", "year", "author", "summary", "publisher", "pageCount", "readPage", "reading"] {
        assert_eq!(book[key], full_book()[key], "field {key}");
    }
    assert_eq!(book["finished"], true);
    assert!(book["createdAt"].is_string());
    assert_eq!(book["createdAt"], book["updatedAt"]);
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let (app, _) = memory_app();

    let (status, body) = send(&app, Method::GET, "/books/unknown-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "fail", "message": "Buku tidak ditemukan" }));
}

#[tokio::test]
async fn list_projects_id_name_publisher() {
    let (app, _) = memory_app();
    let first = create(&app, full_book()).await;
    let second = create(&app, json!({ "name": "Emma" })).await;

    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "data": {
                "books": [
                    { "id": first, "name": "Dune", "publisher": "Chilton" },
                    { "id": second, "name": "Emma", "publisher": null }
                ]
            }
        })
    );
}

#[tokio::test]
async fn list_empty_store() {
    let (app, _) = memory_app();

    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["books"], json!([]));
}

#[tokio::test]
async fn update_replaces_fully() {
    let (app, _) = memory_app();
    let id = create(&app, full_book()).await;
    let uri = format!("/books/{id}");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "name": "Dune Messiah", "pageCount": 256, "readPage": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Buku berhasil diperbarui" })
    );

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    let book = &body["data"]["book"];
    assert_eq!(book["name"], "Dune Messiah");
    assert!(book["author"].is_null());
    assert!(book["publisher"].is_null());
    assert!(book["year"].is_null());
    assert!(book["reading"].is_null());
    assert_eq!(book["finished"], false);
}

#[tokio::test]
async fn update_validation_failures_change_nothing() {
    let (app, _) = memory_app();
    let id = create(&app, full_book()).await;
    let uri = format!("/books/{id}");
    let (_, before) = send(&app, Method::GET, &uri, None).await;

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "year": 2000 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Gagal memperbarui buku. Mohon isi nama buku");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "name": "X", "pageCount": 1, "readPage": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
    );

    let (_, after) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn update_unknown_id_is_404_and_creates_nothing() {
    let (app, store) = memory_app();

    let (status, body) = send(&app, Method::PUT, "/books/nope", Some(full_book())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Gagal memperbarui buku. Id tidak ditemukan");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn delete_then_delete_again_is_404() {
    let (app, _) = memory_app();
    let id = create(&app, full_book()).await;
    let uri = format!("/books/{id}");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Buku berhasil dihapus" })
    );

    for _ in 0..2 {
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Buku gagal dihapus. Id tidak ditemukan");
    }

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn storage_failure_is_500_without_detail() {
    let (app, store) = memory_app();
    let id = create(&app, full_book()).await;
    store.set_offline(true);

    let expected = json!({ "status": "error", "message": "Terjadi kesalahan pada server" });
    let uri = format!("/books/{id}");

    for (method, path, body) in [
        (Method::POST, "/books", Some(full_book())),
        (Method::GET, "/books", None),
        (Method::GET, uri.as_str(), None),
        (Method::PUT, uri.as_str(), Some(full_book())),
        (Method::DELETE, uri.as_str(), None),
    ] {
        let (status, value) = send(&app, method, path, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(value, expected);
    }
}

#[tokio::test]
async fn healthz_reflects_store() {
    let (app, store) = memory_app();

    let (status, body) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    store.set_offline(true);
    let (status, body) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn sqlite_backed_lifecycle() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = router(AppState::new(Arc::new(db.books())), BODY_LIMIT);

    let id = create(&app, full_book()).await;
    let uri = format!("/books/{id}");

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"]["author"], "Frank Herbert");

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "name": "Renamed" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(
        body["data"]["books"],
        json!([{ "id": id, "name": "Renamed", "publisher": null }])
    );

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    db.close().await;
    let (status, _) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn body_without_json_content_type_reads_as_empty() {
    let (app, store) = memory_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .body(Body::from(full_book().to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({ "status": "fail", "message": "Gagal menambahkan buku. Mohon isi nama buku" })
    );
    assert!(store.is_empty().await);

    let id = create(&app, full_book()).await;
    let (status, body) = send(&app, Method::PUT, &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Gagal memperbarui buku. Mohon isi nama buku");
}

#[tokio::test]
async fn unknown_routes_answer_with_envelope() {
    let (app, _) = memory_app();

    for path in ["/books/", "/nope", "/books/abc/extra"] {
        let (status, body) = send(&app, Method::GET, path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(
            body,
            json!({ "status": "fail", "message": "Halaman tidak ditemukan" })
        );
    }

    for (method, path) in [
        (Method::PATCH, "/books"),
        (Method::POST, "/books/abc"),
        (Method::DELETE, "/healthz"),
    ] {
        let (status, body) = send(&app, method, path, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{path}");
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Metode tidak diizinkan");
    }
}
