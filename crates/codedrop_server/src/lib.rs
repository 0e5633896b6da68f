//! In-memory development backend for CodeDrop.
//!
//! Implements the paste HTTP contract the clients speak (token check, size and
//! TTL validation, expiry) without any external storage. Intended for local
//! development and integration tests.

/// Listener and runtime configuration.
pub mod config;
/// Embedded server helper for tests and local tooling.
pub mod embedded;
/// HTTP error mapping for API handlers.
pub mod error;
/// HTTP handlers for paste endpoints.
pub mod handlers;
/// In-memory paste storage.
pub mod store;

pub use config::{resolve_bind_address, ServerConfig, DEFAULT_PORT};
pub use embedded::EmbeddedServer;
pub use error::ApiError;
pub use store::PasteStore;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Shared state passed to HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<PasteStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Fresh state with an empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(PasteStore::new()),
            config: Arc::new(config),
        }
    }
}

fn cors_layer(allow_public_access: bool, port: u16) -> CorsLayer {
    // Header names must be lowercase for `from_static`.
    let token_header = HeaderName::from_static("x-codedrop-token");
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, token_header])
        .max_age(Duration::from_secs(12 * 3600));

    if allow_public_access {
        return base.allow_origin(tower_http::cors::Any);
    }
    let origins: Vec<HeaderValue> = [
        format!("http://localhost:{}", port),
        format!("http://127.0.0.1:{}", port),
    ]
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, allow_public_access: bool) -> Router {
    let port = state.config.port;
    create_app_with_cors_port(state, allow_public_access, port)
}

fn create_app_with_cors_port(state: AppState, allow_public_access: bool, port: u16) -> Router {
    // JSON escaping can inflate content, so the raw body limit sits well above
    // the content limit checked in the handler.
    let body_limit = state.config.max_content_bytes.saturating_mul(8);

    Router::new()
        .route("/api/pastes", post(handlers::paste::create_paste))
        .route("/api/pastes/:id", get(handlers::paste::get_paste))
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(body_limit))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allow_public_access, port))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                )),
        )
}

async fn purge_loop(store: Arc<PasteStore>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        let removed = store.purge_expired(chrono::Utc::now());
        if removed > 0 {
            tracing::info!(removed, "purged expired pastes");
        }
    }
}

/// Run the Axum server with graceful shutdown support.
///
/// A background task purges expired pastes every `purge_interval` until the
/// server stops.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    allow_public_access: bool,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(state.config.port);
    let purge = tokio::spawn(purge_loop(
        state.store.clone(),
        state.config.purge_interval,
    ));
    let app = create_app_with_cors_port(state, allow_public_access, port);
    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await;
    purge.abort();
    result
}
