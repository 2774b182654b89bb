//! Closed sum types.
//!
//! - [`Either`]: a value that is exactly one of two cases (the synchronous
//!   result channel of a `Service` step)
//! - [`Maybe`]: optional presence of a value
//!
//! Both are consumed through an exhaustive `cases` elimination.
//!
//! # Examples
//!
//! ```rust
//! use statebind::control::{Either, Maybe};
//!
//! let outcome: Either<&str, i32> = Maybe::just(3).cases(|| Either::left("missing"), Either::right);
//! assert_eq!(outcome, Either::Right(3));
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
