use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

fn app() -> Router {
    api_routes(AppState::new(ServerConfig::default()))
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = app().oneshot(Request::get("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let response = app().oneshot(Request::get("/api/nope").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_rejects_get() {
    let response = app().oneshot(Request::get("/api/auth/login").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
