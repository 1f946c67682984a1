pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod ingest;
pub mod models;
pub mod notify;
pub mod routes;
pub mod state;
pub mod validate;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use sqlx::SqlitePool;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::notify::Notifier;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: SqlitePool, config: Config, notifier: Option<Arc<dyn Notifier>>) -> Router {
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        notifier,
    });

    Router::new()
        .merge(routes::contact_routes())
        .merge(routes::admin_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
