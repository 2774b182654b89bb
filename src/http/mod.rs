//! HTTP-facing values, routing and output.
//!
//! - [`HttpRequest`], [`HttpResponse`], [`HttpError`]: immutable values
//!   flowing through a `Service`
//! - [`RouteTable`] and [`route`]: exact-path dispatch to controllers
//! - [`ResponseSink`], [`output`], [`output_async`]: run a service and write
//!   the outcome exactly once
//!
//! The transport itself (sockets, HTTP parsing) is left to the caller.

mod error;
mod output;
mod request;
mod response;
mod route;

pub use error::HttpError;
pub use output::{BufferedSink, RenderedResponse, ResponseSink, output};
pub use request::{HttpRequest, Query};
pub use response::HttpResponse;
pub use route::{Controller, RouteTable, route};

#[cfg(feature = "async")]
pub use output::output_async;
