use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use super::handlers::display::render_result;
use super::handlers::probes::{health, healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/api/render", post(render_result))
        .route("/api/health", get(health))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(cors)
        .with_state(state)
}
