use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;

use crate::server::app_state::AppState;

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/detailed", get(health_detailed))
        .with_state(state.clone())
}

async fn health() -> impl IntoResponse {
    "OK".into_response()
}

async fn health_detailed(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let json = json!({
        "platform": true,
        "catalog_games": state.get_catalog().len(),
        "active_sessions": state.get_sessions().len(),
    });

    Json(json)
}
