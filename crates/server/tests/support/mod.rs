#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use service::auth::TokenService;
use service::booking::repository::mock::InMemoryBookingStore;
use service::catalog::repository::mock::InMemoryServiceCatalog;
use tower::ServiceExt;

use server::{routes, ServerState};

pub const SECRET: &str = "test-secret";

pub struct TestApp {
    pub router: Router,
    pub catalog: Arc<InMemoryServiceCatalog>,
    pub bookings: Arc<InMemoryBookingStore>,
    pub tokens: TokenService,
}

pub fn test_app() -> TestApp {
    let catalog = Arc::new(InMemoryServiceCatalog::default());
    let bookings = Arc::new(InMemoryBookingStore::default());
    let state = ServerState::new(catalog.clone(), bookings.clone(), TokenService::new(SECRET));
    let router = routes::build_router(state, tower_http::cors::CorsLayer::very_permissive());
    TestApp { router, catalog, bookings, tokens: TokenService::new(SECRET) }
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

pub fn bearer_get(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

/// Send one request through the router. Non-JSON bodies come back as `Value::String`.
pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = router.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

/// Obtain a token the way a client does, through `POST /jwt`.
pub async fn login(router: &Router, payload: &Value) -> String {
    let (status, body) = send(router, json_request(Method::POST, "/jwt", payload)).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
