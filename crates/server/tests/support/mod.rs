#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use service::auth::repository::mock::MockUserRepository;
use service::auth::TokenIssuer;
use service::product::repository::mock::MockProductRepository;
use tower::ServiceExt;

use server::{routes, ServerState};

pub const SECRET: &str = "test-secret";

pub fn tokens() -> TokenIssuer {
    TokenIssuer::new(SECRET).expect("issuer")
}

pub fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

/// Router over in-memory repositories.
pub fn mock_app() -> Router {
    let state = ServerState::new(
        Arc::new(MockProductRepository::default()),
        Arc::new(MockUserRepository::default()),
        tokens(),
        1,
    );
    routes::build_router(state, cors())
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub fn bare_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp: Response<Body> = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

/// Register `email` with a fixed password and return a bearer token for it.
pub async fn login(app: &Router, email: &str) -> anyhow::Result<String> {
    let (status, _) = send(app, json_request("POST", "/users", None, serde_json::json!({
        "name": "Tester", "email": email, "password": "S3curePass!"
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, json_request("POST", "/users/generate_token", None, serde_json::json!({
        "email": email, "password": "S3curePass!"
    }))).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(body["access_token"].as_str().unwrap_or_default().to_string())
}
