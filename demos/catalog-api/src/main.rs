mod error;
mod routes;
mod state;

use std::env;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut builder = tcgdex_catalog::AsyncCatalogSdk::builder();
    if let Ok(url) = env::var("TCGDEX_BASE_URL") {
        builder = builder.base_url(url);
    }
    if let Ok(path) = env::var("TCGDEX_FAVORITES") {
        builder = builder.favorites_path(path);
    }
    let sdk = builder.build().await.expect("Failed to initialize catalog SDK");
    log::info!("Catalog SDK ready");

    let state = Arc::new(AppState { sdk: sdk.clone() });

    let app = Router::new()
        .route("/api/cards", get(routes::cards::list_cards))
        .route("/api/cards/{id}", get(routes::cards::get_card))
        .route("/api/details", get(routes::cards::get_card_in_set))
        .route("/api/favorites", get(routes::favorites::list_favorites))
        .route("/api/favorites/toggle", post(routes::favorites::toggle_favorite))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    log::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    // The router's handle is gone once `serve` returns; release the last one
    // off the async workers.
    if let Err(e) = sdk.close().await {
        log::error!("Failed to close catalog SDK: {e}");
    }
    log::info!("Shut down");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
    }
}
