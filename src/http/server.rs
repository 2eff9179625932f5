//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router (one route: `GET /`)
//! - Wire up request tracing middleware
//! - Serve on a pre-bound listener with graceful shutdown
//! - Render the current configuration on every request

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tera::Tera;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ConfigStore;
use crate::http::render::render_links;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Current configuration; a snapshot is taken per request.
    pub store: ConfigStore,
    /// Parsed template set, shared read-only across requests.
    pub templates: Arc<Tera>,
}

/// HTTP server for the link page.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store and template set.
    pub fn new(store: ConfigStore, templates: Arc<Tera>) -> Self {
        let state = AppState { store, templates };
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(index))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server on a pre-bound listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Render the link page from the current configuration.
///
/// Every request re-renders from a fresh store snapshot; there is no
/// caching of the produced HTML. A request racing a reload may see either
/// the old or the new configuration.
async fn index(State(state): State<AppState>) -> Response {
    let config = state.store.get();

    match render_links(&state.templates, &config) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering template: {e}"),
            )
                .into_response()
        }
    }
}
