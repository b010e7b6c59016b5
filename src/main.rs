use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod models;
mod routes;
mod services;
mod utils;

use models::host::TelegramWebApp;
use routes::{
    books_page::{book_list_page, AppState, SharedHost},
    health::health_check,
};
use services::books::HttpBooksApi;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("webapp_service=info,tower_http=info")
        .init();

    let host: Option<SharedHost> = TelegramWebApp::detect().map(|webapp| Arc::new(webapp) as _);

    // Host signals fire exactly once, before the first request is served.
    if let Some(host) = &host {
        host.expand();
        host.ready();
    }

    let books_api_url =
        std::env::var("BOOKS_API_URL").unwrap_or_else(|_| "http://0.0.0.0:7001".to_string());
    info!("Using books API at {}", books_api_url);

    let state = AppState {
        books: Arc::new(HttpBooksApi::new(books_api_url)),
        host,
    };

    let app = Router::new()
        .route("/", get(book_list_page))
        .route("/status", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "7004".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Webapp service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
