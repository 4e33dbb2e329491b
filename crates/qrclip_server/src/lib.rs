//! HTTP server wiring for QRClip (router, handlers, and shared state).

/// HTTP error mapping for API handlers.
pub mod error;
/// HTTP handlers for pages and clip endpoints.
pub mod handlers;
/// QR rendering collaborator.
pub mod qr;

pub use qrclip_core::{config, store, AppError, Clip, ClipboardStore, Config, DEFAULT_PORT};

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ClipboardStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct shared application state with a fresh store.
    ///
    /// # Arguments
    /// - `config`: Loaded configuration.
    ///
    /// # Returns
    /// A new [`AppState`].
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(ClipboardStore::new()))
    }

    /// Construct shared application state around an existing store.
    ///
    /// # Arguments
    /// - `config`: Loaded configuration.
    /// - `store`: Shared clipboard store.
    ///
    /// # Returns
    /// A new [`AppState`] wired to the provided store.
    pub fn with_store(config: Config, store: Arc<ClipboardStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Resolve the base URL used when composing submission links.
///
/// `PUBLIC_URL` wins when configured; otherwise the request's `Host`
/// header is used, falling back to the configured loopback bind.
///
/// # Arguments
/// - `config`: Server configuration.
/// - `host`: Request `Host` header value, when present.
///
/// # Returns
/// A base URL without a trailing slash.
pub fn request_base_url(config: &Config, host: Option<&str>) -> String {
    if let Some(url) = &config.public_url {
        return url.clone();
    }
    match host {
        Some(host) if !host.trim().is_empty() => format!("http://{}", host.trim()),
        _ => format!("http://127.0.0.1:{}", config.port),
    }
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
///
/// # Returns
/// Configured `axum::Router`.
pub fn create_app(state: AppState) -> Router {
    // Any-origin CORS: this is a local sharing tool with no auth surface.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    // Headroom over the clip limit for form-encoding overhead; the handler
    // enforces the exact text limit.
    let max_body = state.config.max_clip_size.saturating_add(1024);
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/post/:id", post(handlers::clip::submit_clip))
        .route("/post/:id", delete(handlers::clip::delete_clip))
        .route("/get/:id", get(handlers::pages::show_clip))
        .route("/data", get(handlers::clip::clipboard_data))
        .route("/clear", delete(handlers::clip::clear_clips))
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(max_body))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Resolve the listener address from env var overrides and security policy.
///
/// # Arguments
/// - `config`: Server configuration containing the configured `port`.
/// - `allow_public_access`: Whether non-loopback bind targets are permitted.
///
/// # Returns
/// A validated socket address that enforces loopback when public access is disabled.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match std::env::var("BIND") {
        Ok(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        Err(_) => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

/// Run the axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Returns
/// `Ok(())` when the server exits cleanly.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
