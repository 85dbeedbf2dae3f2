use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use library_catalog::catalog::controller::{add_book, add_reader, borrow_book, catalog_status, find_book_by_title,
                                           find_books, find_reader_by_name, return_book, search_catalog};
use library_catalog::catalog::factory::create_catalog_service;
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::Configuration;
use library_catalog::gateway::GatewayPublisherVia;
use library_catalog::utils::logs::setup_tracing;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    let catalog = create_catalog_service(&config, GatewayPublisherVia::Logs)?;
    let state = AppState::new(config.clone(), Arc::from(catalog));

    let app = Router::new()
        .route("/books", post(add_book).get(find_books))
        .route("/books/:title", get(find_book_by_title))
        .route("/readers", post(add_reader))
        .route("/readers/:name", get(find_reader_by_name))
        .route("/loans", post(borrow_book))
        .route("/loans/return", post(return_book))
        .route("/search", get(search_catalog))
        .route("/status", get(catalog_status))
        .with_state(state);

    let addr: SocketAddr = env::var("LIBRARY_LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()?;
    info!(%addr, branch_id = %config.branch_id, rental_limit = config.rental_limit, "starting catalog service");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
