//! HTTP surface: the color handler, its router, and the serve loop.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::color::{self, ColorParameters, ColorSource, RandomColor};
use crate::config::ServiceConfig;
use crate::error::{ColorError, Result};
use crate::output::print_color;

/// Shared, read-only state for every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub source: Arc<dyn ColorSource>,
}

impl AppState {
    /// State drawing random colors from the configured palette.
    pub fn new(config: ServiceConfig) -> Self {
        let source = RandomColor::new(config.palette.clone());
        Self::with_source(config, source)
    }

    pub fn with_source(config: ServiceConfig, source: impl ColorSource + 'static) -> Self {
        Self {
            config: Arc::new(config),
            source: Arc::new(source),
        }
    }
}

/// Decode an optional request body into color parameters.
///
/// An empty or whitespace-only body, `[]`, and `null` all mean "no parameters".
pub fn decode_parameters(body: &[u8]) -> Result<Vec<ColorParameters>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let params: Option<Vec<ColorParameters>> = serde_json::from_slice(body)?;
    Ok(params.unwrap_or_default())
}

/// Resolve a color for this request and write it as a JSON string.
pub async fn get_color(State(state): State<AppState>, body: Bytes) -> Response {
    let params = match decode_parameters(&body) {
        Ok(params) => params,
        Err(e) => {
            warn!(error = %e, "Rejecting request body");
            return e.into_response();
        }
    };

    let resolved = color::resolve(
        state.config.color_override(),
        &params,
        state.source.as_ref(),
    );
    debug!(color = %resolved.color, origin = %resolved.origin, "Resolved color");

    print_color(&resolved.color, StatusCode::OK)
}

/// Router serving the handler on `/` and `/color` for any method.
///
/// Request bodies are not size-limited; any valid parameter array resolves.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(get_color))
        .route("/color", any(get_color))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}

/// Serve on an already-bound listener until `shutdown` completes.
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "Color service listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Color service stopped");
    Ok(())
}

/// Bind `config.addr()` and serve until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ColorError::ServerFailed {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;

    serve_on(listener, AppState::new(config), shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
