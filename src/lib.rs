//! # statebind
//!
//! State-threading, short-circuiting service combinators for composing
//! request handlers.
//!
//! ## Overview
//!
//! A request handler is built as a pipeline of small steps. Each step reads
//! or replaces a piece of request-scoped state, produces a value, or fails
//! with a typed error. The library provides:
//!
//! - **Control**: the closed sum types [`Either`](control::Either) and
//!   [`Maybe`](control::Maybe)
//! - **Effect**: [`Service`](effect::Service), its combinators, the
//!   [`kleisli`](effect::kleisli) composition and the result channels
//!   ([`Immediate`](effect::Immediate), [`Deferred`](effect::Deferred))
//! - **HTTP**: request/response values, the exact-match route table and the
//!   single run-and-render boundary ([`output`](http::output))
//!
//! ## Feature Flags
//!
//! - `control`: `Either` and `Maybe`
//! - `effect`: `Service` over the immediate channel
//! - `async`: the deferred channel and `AsyncIO`
//! - `http`: HTTP values, routing and output
//! - `serde`: `Serialize`/`Deserialize` for the value types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use statebind::prelude::*;
//!
//! let counter: Service<i32, String, i32> = Service::read_state()
//!     .bind(|count: i32| Service::write_state(count + 1))
//!     .bind(|()| Service::read_state());
//!
//! assert_eq!(counter.run(41), Either::Right((42, 42)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use statebind::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "http")]
    pub use crate::http::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "http")]
pub mod http;
