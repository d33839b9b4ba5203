// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact API server built on axum.
//!
//! Sets up routes, CORS, request tracing, and shared state.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use contactbook_config::model::ServerConfig;
use contactbook_core::{ContactError, ContactStore};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Backing contact store.
    pub store: Arc<dyn ContactStore>,
    /// Process start time for uptime reporting.
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            store,
            started_at: Instant::now(),
        }
    }
}

/// CORS for the configured frontend origins, with credentials allowed.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, ContactError> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim_end_matches('/'))
                .map_err(|e| ContactError::Config(format!("invalid CORS origin `{origin}`: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Build the application router.
///
/// - GET / (liveness text)
/// - GET /health
/// - GET, POST /api/contacts
/// - DELETE /api/contacts/{id}
pub fn router(state: GatewayState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::get_root))
        .route("/health", get(handlers::get_health))
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route("/api/contacts/{id}", delete(handlers::delete_contact))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ContactError> {
    let addr = format!("{}:{}", config.host, config.port);
    TcpListener::bind(&addr)
        .await
        .map_err(|e| ContactError::Config(format!("failed to bind {addr}: {e}")))
}

/// Serve `app` on `listener` until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
) -> Result<(), ContactError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "contact API listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| ContactError::Internal(format!("server error: {e}")))?;

    tracing::info!("contact API stopped");
    Ok(())
}

/// Bind, build the router, and serve until `shutdown` is cancelled.
pub async fn start_server(
    config: &ServerConfig,
    store: Arc<dyn ContactStore>,
    shutdown: CancellationToken,
) -> Result<(), ContactError> {
    let cors = cors_layer(&config.allowed_origins)?;
    let app = router(GatewayState::new(store), cors);
    let listener = bind(config).await?;
    serve(listener, app, shutdown).await
}
