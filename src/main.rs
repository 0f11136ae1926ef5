use std::time::Duration;

use axum::{Router, middleware::from_fn};
use dotenv::dotenv;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use crate::{
    config::config::CONFIG, health::handlers::health_routes, mw::request_mw::request_mw,
    quiz::handlers::quiz_routes, server::app_state::AppState,
};

mod catalog;
mod config;
mod health;
mod mw;
mod quiz;
mod server;
mod session;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    // Initialize state
    let state = AppState::from_config().unwrap_or_else(|e| panic!("{}", e));

    // Sweep expired sessions in the background
    let sweep_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(CONFIG.session.sweep_interval_secs));
        loop {
            interval.tick().await;
            sweep_state.get_sessions().evict_expired();
        }
    });

    // Initialize routes
    let app = Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/quiz", quiz_routes(state.clone()))
        .layer(from_fn(request_mw));

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap();

    info!(
        "Server listening on address: {}",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app).await.unwrap();
}
