//! End-to-end tests driving the full router against a real in-memory
//! SQLite store.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use chrono::DateTime;
use http_body_util::BodyExt;
use std::time::Duration;
use taskd_server::{build_app, create_store, Config};
use tower::ServiceExt;

async fn test_app() -> Router {
    let mut config = Config::default();
    config.database.url = Some(":memory:".to_string());
    let store = create_store(&config).await.unwrap();
    build_app(store, &config)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_full_task_lifecycle() {
    let app = test_app().await;

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/tasks",
            r#"{"title":"A","description":"B","due_date":"2024-12-31T23:59:59Z"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;

    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["title"], "A");
    assert_eq!(created["description"], "B");
    assert_eq!(created["created_at"], created["updated_at"]);

    let due = DateTime::parse_from_rfc3339(created["due_date"].as_str().unwrap()).unwrap();
    let expected = DateTime::parse_from_rfc3339("2024-12-31T23:59:59Z").unwrap();
    assert_eq!(due, expected);

    // Update: title/description/due_date change, created_at survives,
    // updated_at advances
    tokio::time::sleep(Duration::from_millis(10)).await;
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/tasks/{id}"),
            r#"{"title":"C","description":"D","due_date":"2025-01-15T23:59:59Z"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["id"].as_i64().unwrap(), id);
    assert_eq!(updated["title"], "C");
    assert_eq!(updated["created_at"], created["created_at"]);

    let before = DateTime::parse_from_rfc3339(created["updated_at"].as_str().unwrap()).unwrap();
    let after = DateTime::parse_from_rfc3339(updated["updated_at"].as_str().unwrap()).unwrap();
    assert!(after > before);

    // Delete, then the task is gone
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("GET", &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_reflects_creates_and_deletes() {
    let app = test_app().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/tasks",
                &format!(r#"{{"title":"task {i}","description":"body {i}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        ids.push(body_json(response).await["id"].as_i64().unwrap());
    }

    for id in &ids[..2] {
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/tasks/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = app.oneshot(empty_request("GET", "/tasks")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tasks = body_json(response).await;
    let tasks = tasks.as_array().unwrap();

    assert_eq!(tasks.len(), 3);
    let listed: Vec<i64> = tasks.iter().map(|t| t["id"].as_i64().unwrap()).collect();
    assert_eq!(listed, ids[2..].to_vec());
}

#[tokio::test]
async fn test_created_task_round_trips_through_get() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/tasks",
            r#"{"title":"Round","description":"Trip","due_date":"2024-06-01T12:00:00Z"}"#,
        ))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(empty_request("GET", &format!("/tasks/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_malformed_body_returns_400() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/tasks", r#"{"title": }"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let app = test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/tasks/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_absent_id_returns_204() {
    let app = test_app().await;

    let response = app
        .oneshot(empty_request("DELETE", "/tasks/98765"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_absent_id_returns_404() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/tasks/98765",
            r#"{"title":"C","description":"D"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
