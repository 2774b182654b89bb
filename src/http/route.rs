//! Exact-match route table and dispatcher.
//!
//! A [`RouteTable`] is an ordered list of `(path, controller)` pairs built
//! once at startup. [`route`] scans it front to back and hands the request
//! to the first controller whose path equals the request path exactly. There
//! is no pattern or prefix matching. When nothing matches the result is a
//! *successful* empty `404` response, so "not found" never reaches
//! error-channel recovery.
//!
//! The table is generic over the error type and the result channel, so the
//! synchronous edition (`HttpError` failures) and the asynchronous edition
//! (`HttpResponse` failures over [`Deferred`](crate::effect::Deferred))
//! share one dispatcher.
//!
//! # Examples
//!
//! ```rust
//! use statebind::control::Either;
//! use statebind::effect::Service;
//! use statebind::http::{HttpError, HttpRequest, HttpResponse, RouteTable, route};
//!
//! let table: RouteTable<(), HttpError> = RouteTable::new()
//!     .on("/index.html", |_| Service::pure(HttpResponse::ok("Hello world!")));
//!
//! let found = route(&table, &HttpRequest::from_uri("/index.html"));
//! assert_eq!(found.eval(()), Either::Right(HttpResponse::ok("Hello world!")));
//!
//! let missing = route(&table, &HttpRequest::from_uri("/missing.html"));
//! assert_eq!(missing.eval(()), Either::Right(HttpResponse::not_found()));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::effect::{Channel, Immediate, Service};

use super::{HttpRequest, HttpResponse};

/// A request handler producing a response-yielding service.
pub type Controller<S, E, C = Immediate> =
    Arc<dyn Fn(HttpRequest) -> Service<S, E, HttpResponse, C> + Send + Sync>;

/// Ordered `(path, controller)` associations; the first exact match wins.
pub struct RouteTable<S, E, C: Channel = Immediate> {
    routes: Vec<(String, Controller<S, E, C>)>,
}

impl<S, E, C> RouteTable<S, E, C>
where
    S: Send + 'static,
    E: Send + 'static,
    C: Channel,
{
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route. Returns `self` so registrations chain.
    ///
    /// Registering the same path twice keeps both entries; only the first
    /// is ever reached.
    #[must_use]
    pub fn on<F>(mut self, path: impl Into<String>, controller: F) -> Self
    where
        F: Fn(HttpRequest) -> Service<S, E, HttpResponse, C> + Send + Sync + 'static,
    {
        self.routes.push((path.into(), Arc::new(controller)));
        self
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered paths in lookup order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(path, _)| path.as_str())
    }

    /// The controller registered first for `path`, if any.
    pub fn lookup(&self, path: &str) -> Option<&Controller<S, E, C>> {
        self.routes
            .iter()
            .find(|(registered, _)| registered == path)
            .map(|(_, controller)| controller)
    }

    /// Dispatches `request`; see [`route`].
    pub fn dispatch(&self, request: &HttpRequest) -> Service<S, E, HttpResponse, C> {
        route(self, request)
    }
}

impl<S, E, C> Default for RouteTable<S, E, C>
where
    S: Send + 'static,
    E: Send + 'static,
    C: Channel,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E, C: Channel> Clone for RouteTable<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<S, E, C: Channel> fmt::Debug for RouteTable<S, E, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.routes.iter().map(|(path, _)| path))
            .finish()
    }
}

/// Selects the service for `request` from `table`.
///
/// Returns the service built by the first controller registered under
/// exactly `request.path()`, or a successful empty `404` when none is.
pub fn route<S, E, C>(table: &RouteTable<S, E, C>, request: &HttpRequest) -> Service<S, E, HttpResponse, C>
where
    S: Send + 'static,
    E: Send + 'static,
    C: Channel,
{
    match table.lookup(request.path()) {
        Some(controller) => {
            tracing::debug!(path = request.path(), "route matched");
            controller(request.clone())
        }
        None => {
            tracing::debug!(path = request.path(), "no route matched, responding 404");
            Service::pure(HttpResponse::not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use crate::http::HttpError;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn respond(body: &'static str) -> impl Fn(HttpRequest) -> Service<(), HttpError, HttpResponse> {
        move |_| Service::pure(HttpResponse::ok(body))
    }

    #[rstest]
    fn first_matching_entry_wins() {
        let table: RouteTable<(), HttpError> = RouteTable::new()
            .on("/a", respond("first"))
            .on("/a", respond("second"));

        let service = route(&table, &HttpRequest::from_uri("/a"));
        assert_eq!(service.eval(()), Either::Right(HttpResponse::ok("first")));
    }

    #[rstest]
    fn later_entry_reached_when_earlier_do_not_match() {
        let table: RouteTable<(), HttpError> = RouteTable::new()
            .on("/a", respond("a"))
            .on("/b", respond("b"))
            .on("/c", respond("c"));

        let service = table.dispatch(&HttpRequest::from_uri("/b?x=1"));
        assert_eq!(service.eval(()), Either::Right(HttpResponse::ok("b")));
    }

    #[rstest]
    #[case("/a/")]
    #[case("/")]
    #[case("/A")]
    #[case("/ab")]
    fn no_prefix_or_case_insensitive_matching(#[case] path: &str) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let table: RouteTable<(), HttpError> = RouteTable::new().on("/a", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Service::pure(HttpResponse::ok("a"))
        });

        let service = route(&table, &HttpRequest::from_uri(path));
        assert_eq!(service.eval(()), Either::Right(HttpResponse::not_found()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn controller_receives_the_request() {
        let table: RouteTable<(), HttpError> = RouteTable::new().on("/echo", |request: HttpRequest| {
            let body = request.query_param("say").unwrap_or_default().to_string();
            Service::pure(HttpResponse::ok(body))
        });

        let service = route(&table, &HttpRequest::from_uri("/echo?say=hi"));
        assert_eq!(service.eval(()), Either::Right(HttpResponse::ok("hi")));
    }

    #[rstest]
    fn table_reports_paths_in_order() {
        let table: RouteTable<(), HttpError> = RouteTable::new()
            .on("/index.html", respond("i"))
            .on("/secret.html", respond("s"));

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["/index.html", "/secret.html"]);
        assert_eq!(format!("{table:?}"), r#"["/index.html", "/secret.html"]"#);
    }
}
