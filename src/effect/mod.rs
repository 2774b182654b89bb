//! Effect layer: the `Service` computation and its result channels.
//!
//! This module provides:
//!
//! - [`Service`]: a re-runnable computation threading state `S` that fails
//!   with `E` or yields `A`
//! - [`kleisli`]: end-to-end composition of service-producing functions
//! - [`Channel`]: how a step's outcome is delivered, [`Immediate`] for the
//!   synchronous edition and [`Deferred`] for the asynchronous one
//! - [`AsyncIO`]: the single-resolution asynchronous container behind
//!   [`Deferred`]
//!
//! # Examples
//!
//! ```rust
//! use statebind::control::Either;
//! use statebind::effect::Service;
//!
//! let step: Service<Vec<&str>, String, usize> = Service::read_state()
//!     .bind(|log: Vec<&'static str>| {
//!         let mut next = log.clone();
//!         next.push("visited");
//!         Service::write_state(next).map(move |()| log.len())
//!     });
//!
//! assert_eq!(step.run(vec![]), Either::Right((vec!["visited"], 0)));
//! ```

// =============================================================================
// Result Channels
// =============================================================================

mod channel;

pub use channel::{Channel, Immediate};

#[cfg(feature = "async")]
pub use channel::Deferred;

// =============================================================================
// AsyncIO (requires async feature)
// =============================================================================

#[cfg(feature = "async")]
mod async_io;

#[cfg(feature = "async")]
pub use async_io::AsyncIO;

// =============================================================================
// Service and Composition
// =============================================================================

mod kleisli;
mod service;

pub use kleisli::kleisli;
pub use service::{Outcome, Service};
