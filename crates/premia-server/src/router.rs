use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the service router. `cors` attaches a permissive CORS layer.
///
/// Request bodies are not size-limited.
pub fn build_router(state: AppState, cors: bool) -> Router {
    let router = Router::new()
        .route("/predict/:id", post(handlers::predict))
        .route("/return_value/:id", get(handlers::retrieve))
        .layer(DefaultBodyLimit::disable())
        .with_state(state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
