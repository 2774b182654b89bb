//! Running a service and rendering its outcome.
//!
//! [`output`] and [`output_async`] are the only places where a pipeline has
//! an observable effect: each runs the service from an initial state and
//! performs exactly one terminal write to a [`ResponseSink`]. A domain
//! failure is rendered as a response, never re-raised.

use crate::control::Either;
use crate::effect::Service;

#[cfg(feature = "async")]
use crate::effect::Deferred;

use super::{HttpError, HttpResponse};

/// The transport-side target of a rendered response.
///
/// Status and headers may be set any number of times; [`end`](Self::end)
/// writes the body and concludes the response. `end` consumes the sink, so
/// no write can follow it.
pub trait ResponseSink {
    /// The value produced when the response is concluded.
    type Output;

    /// Sets the numeric status.
    fn set_status(&mut self, status: u16);

    /// Sets a header, replacing an earlier value for the same name.
    fn set_header(&mut self, name: &str, value: &str);

    /// Writes the body and concludes the response.
    fn end(self, body: String) -> Self::Output;
}

/// A fully rendered response held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    /// The status code.
    pub status: u16,
    /// Headers in the order they were first set.
    pub headers: Vec<(String, String)>,
    /// The body.
    pub body: String,
}

impl RenderedResponse {
    /// The value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An in-memory [`ResponseSink`] producing a [`RenderedResponse`].
///
/// The status defaults to `200` when never set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedSink {
    status: u16,
    headers: Vec<(String, String)>,
}

impl BufferedSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
        }
    }
}

impl Default for BufferedSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for BufferedSink {
    type Output = RenderedResponse;

    fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    fn set_header(&mut self, name: &str, value: &str) {
        let position = self
            .headers
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name));
        match position {
            Some(index) => self.headers[index].1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    fn end(self, body: String) -> RenderedResponse {
        RenderedResponse {
            status: self.status,
            headers: self.headers,
            body,
        }
    }
}

/// Runs `service` from `initial_state` and renders the outcome to `sink`.
///
/// - failure: the error's status, `Content-Type: text/plain`, body
///   `[code] message`
/// - success: the response's status and body
///
/// # Examples
///
/// ```rust
/// use statebind::effect::Service;
/// use statebind::http::{BufferedSink, HttpError, HttpResponse, output};
///
/// let denied: Service<(), HttpError, HttpResponse> = Service::error(HttpError::unauthorized());
/// let rendered = output(BufferedSink::new(), &denied, ());
///
/// assert_eq!(rendered.status, 401);
/// assert_eq!(rendered.body, "[0] Unauthorized");
/// assert_eq!(rendered.header("content-type"), Some("text/plain"));
/// ```
pub fn output<S, W>(mut sink: W, service: &Service<S, HttpError, HttpResponse>, initial_state: S) -> W::Output
where
    S: Send + 'static,
    W: ResponseSink,
{
    match service.run(initial_state) {
        Either::Left(error) => {
            tracing::debug!(status = error.status(), code = error.code(), "rendering failure");
            sink.set_status(error.status());
            sink.set_header("Content-Type", "text/plain");
            sink.end(error.to_string())
        }
        Either::Right((_, response)) => render(sink, response),
    }
}

/// Runs a deferred `service` from `initial_state` and renders the outcome to
/// `sink` once it settles.
///
/// Failure and success both carry an [`HttpResponse`] and render the same
/// way: its status and body.
#[cfg(feature = "async")]
pub async fn output_async<S, W>(
    sink: W,
    service: &Service<S, HttpResponse, HttpResponse, Deferred>,
    initial_state: S,
) -> W::Output
where
    S: Send + 'static,
    W: ResponseSink,
{
    match service.run(initial_state).await {
        Either::Left(response) => {
            tracing::debug!(status = response.status(), "rendering failure response");
            render(sink, response)
        }
        Either::Right((_, response)) => render(sink, response),
    }
}

fn render<W: ResponseSink>(mut sink: W, response: HttpResponse) -> W::Output {
    tracing::debug!(status = response.status(), "rendering response");
    sink.set_status(response.status());
    sink.end(response.body().to_string())
}
