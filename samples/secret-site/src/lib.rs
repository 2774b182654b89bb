//! Secret Site Sample Application
//!
//! A two-page site served through statebind services:
//!
//! - `/index.html` always answers `Hello world!`
//! - `/secret.html` requires the configured password in the query string
//!   and greets the authenticated user by email
//!
//! # Layout
//!
//! - [`config`]: environment-driven settings
//! - [`domain`]: the per-request [`Environment`](domain::Environment) and
//!   [`User`](domain::User)
//! - [`pages`]: controllers and the route table
//! - [`server`]: axum glue turning each HTTP call into one routed service run
//!
//! # statebind Features Used
//!
//! - `Service` for state threading and short-circuiting on `HttpError`
//! - `Maybe` for the optionally authenticated user
//! - `kleisli` to put the auth policy in front of the secret page
//! - `RouteTable`/`route`/`output` for dispatch and rendering

pub mod config;
pub mod domain;
pub mod pages;
pub mod server;
