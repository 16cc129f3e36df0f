//! The HTTP application: a single greeting route mounted under the root path.
//!
//! The router knows nothing about invocation events; the adapter in
//! [`crate::api`] feeds it ordinary `http` requests.

pub mod openapi;

use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::json;

use crate::core::config::AppConfig;

pub const GREETING: &str = "Hello World";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Builds the application router for the configured root path.
///
/// Routes:
/// - `GET {root}/` returns `{"message": "Hello World"}`
/// - `GET {root}/openapi.json` returns the schema document
///
/// Everything else falls through to a 404 with `{"detail": "Not Found"}`; a
/// known path with the wrong method gets a 405 with
/// `{"detail": "Method Not Allowed"}` and an `allow` header.
#[must_use]
pub fn router(config: &AppConfig) -> Router {
    let root = config.root_path.as_str();
    let schema = openapi::document(root);

    Router::new()
        .route(&format!("{}/", root), get(root_handler))
        .route(
            &format!("{}/openapi.json", root),
            get(move || {
                let schema = schema.clone();
                async move { Json(schema) }
            }),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

/// The 404 the router's fallback produces, for requests that never reach it.
#[must_use]
pub fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response()
}

async fn root_handler() -> Json<Greeting> {
    Json(Greeting { message: GREETING })
}

async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    not_found_response()
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}
