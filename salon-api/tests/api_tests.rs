//! Integration tests for salon-api endpoints
//!
//! Each test gets its own database in a temp dir and drives the router
//! directly with `oneshot`, no socket involved.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use salon_api::{build_router, AppState};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Test helper: fresh database + router. Keep the TempDir alive.
async fn setup_app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let pool = salon_common::db::init_database(&dir.path().join("salon.db"))
        .await
        .expect("Should create test database");
    (dir, build_router(AppState::new(pool)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and return (status, parsed JSON body)
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };
    (status, body)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "salon-api");
    assert_eq!(body["database"], "ok");
    assert!(body["version"].is_string());
}

// =============================================================================
// Clients
// =============================================================================

#[tokio::test]
async fn test_create_and_get_client() {
    let (_dir, app) = setup_app().await;

    let (status, created) = send(
        &app,
        post_json("/clients", json!({"name": "Thais", "phone": "11998765432"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Thais");
    assert_eq!(created["phone"], "11998765432");
    assert_eq!(created["total_visits"], 0);
    assert!(created["created_at"].is_string());

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, get(&format!("/clients/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_client_without_phone() {
    let (_dir, app) = setup_app().await;

    let (status, created) = send(&app, post_json("/clients", json!({"name": "Lucas"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["phone"].is_null());
}

#[tokio::test]
async fn test_create_client_blank_name_rejected() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, post_json("/clients", json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_list_clients_ordered_by_name() {
    let (_dir, app) = setup_app().await;

    for name in ["Zayan", "Ramon", "Lucas"] {
        send(&app, post_json("/clients", json!({"name": name}))).await;
    }

    let (status, body) = send(&app, get("/clients")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Lucas", "Ramon", "Zayan"]);
}

#[tokio::test]
async fn test_unknown_client_is_404() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, get("/clients/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send(&app, get("/clients/9999/history")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Appointments
// =============================================================================

#[tokio::test]
async fn test_book_by_name_creates_then_reuses_client() {
    let (_dir, app) = setup_app().await;

    let (status, first) = send(
        &app,
        post_json("/appointments", json!({"name": "Thais", "service": "Corte de cabelo"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["service"], "Corte de cabelo");
    let client_id = first["client_id"].as_i64().unwrap();

    let (status, second) = send(
        &app,
        post_json("/appointments", json!({"name": "Thais", "service": "Hidratação"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["client_id"].as_i64().unwrap(), client_id);

    let (_, clients) = send(&app, get("/clients")).await;
    let clients = clients.as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["total_visits"], 2);
}

#[tokio::test]
async fn test_book_by_client_id() {
    let (_dir, app) = setup_app().await;

    let (_, client) = send(&app, post_json("/clients", json!({"name": "Zayan"}))).await;
    let id = client["id"].as_i64().unwrap();

    let (status, appt) = send(
        &app,
        post_json("/appointments", json!({"client_id": id, "service": "Manicure"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(appt["client_id"].as_i64().unwrap(), id);
    assert!(appt["id"].is_number());
    assert!(appt["created_at"].is_string());

    let (_, client) = send(&app, get(&format!("/clients/{}", id))).await;
    assert_eq!(client["total_visits"], 1);
}

#[tokio::test]
async fn test_book_unknown_client_id_is_404_and_writes_nothing() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(
        &app,
        post_json("/appointments", json!({"client_id": 77, "service": "Escova"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (_, all) = send(&app, get("/appointments")).await;
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_book_without_client_reference_is_400() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, post_json("/appointments", json!({"service": "Escova"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (_, clients) = send(&app, get("/clients")).await;
    assert!(clients.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_history_and_listing_newest_first() {
    let (_dir, app) = setup_app().await;

    let mut ids = Vec::new();
    for service in ["Corte de cabelo", "Hidratação", "Escova"] {
        let (_, appt) = send(
            &app,
            post_json("/appointments", json!({"name": "Ramon", "service": service})),
        )
        .await;
        ids.push(appt["id"].as_i64().unwrap());
    }
    send(
        &app,
        post_json("/appointments", json!({"name": "Lucas", "service": "Manicure"})),
    )
    .await;

    let (_, ramon) = send(&app, get("/clients")).await;
    let ramon_id = ramon
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Ramon")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let (status, history) = send(&app, get(&format!("/clients/{}/history", ramon_id))).await;
    assert_eq!(status, StatusCode::OK);
    let history_ids: Vec<i64> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    ids.reverse();
    assert_eq!(history_ids, ids);

    let (_, all) = send(&app, get("/appointments")).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0]["service"], "Manicure");
}
