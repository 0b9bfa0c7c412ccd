// src/server/mod.rs

//! HTTP interface for the review service.
//!
//! The router is built separately from the listener so tests can drive the
//! same application over an ephemeral port.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tokio::net::TcpListener;

use crate::error::Result;
use crate::storage::ReviewStore;

/// Shared state handed to request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ReviewStore>,
    max_review_length: usize,
}

impl AppState {
    pub fn new(store: impl ReviewStore + 'static, max_review_length: usize) -> Self {
        Self {
            store: Arc::new(store),
            max_review_length,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/reviews",
            post(handlers::create_review).get(handlers::list_reviews),
        )
        .with_state(state)
}

/// Bind the listener and serve requests until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
