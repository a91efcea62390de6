//! Route registration — collects all module routes + system endpoints.

use axum::Json;
use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tracing::info;

/// Build the complete router with all routes.
///
/// Module routers carry their own resource paths and are merged under the
/// fixed `/api` prefix, next to the test probe.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    // System endpoints (public, no state needed).
    let app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    let mut api = Router::new().route("/test", post(test_probe));
    for (name, router) in module_routes {
        api = api.merge(router);
        info!("Mounted module {} under /api", name);
    }

    app.nest("/api", api)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "restod",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Test probe — accepts any JSON body and always reports success.
async fn test_probe(Json(_body): Json<serde_json::Value>) -> impl IntoResponse {
    Json(serde_json::json!({"result": "success"}))
}
