//! axum glue.
//!
//! Every request goes to a single fallback handler, which turns the URI into
//! an [`HttpRequest`], routes it through the site's [`RouteTable`] and renders
//! the resulting service into an axum [`Response`] via [`AxumSink`].

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use statebind::http::{HttpError, HttpRequest, ResponseSink, RouteTable, output, route};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::domain::Environment;
use crate::pages::site_routes;

/// Errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[from] std::io::Error),
}

/// Shared handler state.
#[derive(Clone)]
pub struct Site {
    routes: Arc<RouteTable<Environment, HttpError>>,
}

impl Site {
    pub fn new(routes: RouteTable<Environment, HttpError>) -> Self {
        Self {
            routes: Arc::new(routes),
        }
    }
}

/// A [`ResponseSink`] assembling an axum [`Response`].
#[derive(Debug, Default)]
pub struct AxumSink {
    status: StatusCode,
    headers: HeaderMap,
}

impl ResponseSink for AxumSink {
    type Output = Response;

    fn set_status(&mut self, status: u16) {
        self.status = StatusCode::from_u16(status).unwrap_or_else(|_| {
            tracing::warn!(status, "invalid status code, answering 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(name, "dropping invalid header"),
        }
    }

    fn end(self, body: String) -> Response {
        (self.status, self.headers, Body::from(body)).into_response()
    }
}

/// Handles any request: one routed service run per call, from an anonymous
/// environment.
pub async fn serve_page(State(site): State<Site>, uri: Uri) -> Response {
    let target = uri.path_and_query().map_or_else(|| uri.path(), |target| target.as_str());
    let request = HttpRequest::from_uri(target);
    let service = route(&site.routes, &request);
    output(AxumSink::default(), &service, Environment::anonymous())
}

/// Creates the router for `site`.
pub fn create_router(site: Site) -> Router {
    Router::new()
        .fallback(serve_page)
        .with_state(site)
        .layer(TraceLayer::new_for_http())
}

/// Binds to the configured address and serves until ctrl-c.
///
/// # Errors
///
/// Returns [`ServerError`] when binding or serving fails.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let address = config.bind_address();
    let app = create_router(Site::new(site_routes(&config)));

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
    tracing::info!("Secret Site started on http://{address}");
    tracing::info!("  GET /index.html");
    tracing::info!("  GET /secret.html?email=...&password=...");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Secret Site stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(error) => tracing::error!("Failed to listen for CTRL+C: {error}"),
    }
}
