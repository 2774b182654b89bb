//! `AsyncIO` - a deferred, single-resolution asynchronous computation.
//!
//! `AsyncIO<A>` is the outcome container of the [`Deferred`](super::Deferred)
//! channel. It describes asynchronous work without starting it: nothing runs
//! until the value is awaited, and because awaiting consumes the value it
//! settles exactly once.
//!
//! # Examples
//!
//! ```rust,ignore
//! use statebind::effect::AsyncIO;
//!
//! #[tokio::main]
//! async fn main() {
//!     let async_io = AsyncIO::pure(10)
//!         .fmap(|x| x * 2)
//!         .flat_map(|x| AsyncIO::pure(x + 1));
//!     assert_eq!(async_io.await, 21);
//! }
//! ```

use std::future::{Future, IntoFuture};

use futures::FutureExt;
use futures::future::BoxFuture;

/// A deferred asynchronous computation producing a value of type `A`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `AsyncIO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(AsyncIO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct AsyncIO<A> {
    /// Builds the future on first and only run.
    run_async_io: Box<dyn FnOnce() -> BoxFuture<'static, A> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Creates a new `AsyncIO` from a closure returning a future.
    ///
    /// The closure is not invoked until the `AsyncIO` is run.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_async_io: Box::new(move || action().boxed()),
        }
    }

    /// Creates an `AsyncIO` from a future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_async_io: Box::new(move || future.boxed()),
        }
    }
}

impl<A: Send + 'static> AsyncIO<A> {
    /// Wraps a ready value.
    ///
    /// ```rust,ignore
    /// use statebind::effect::AsyncIO;
    ///
    /// assert_eq!(AsyncIO::pure(42).await, 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::from_future(async move { value })
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<A: 'static> IntoFuture for AsyncIO<A> {
    type Output = A;
    type IntoFuture = BoxFuture<'static, A>;

    fn into_future(self) -> Self::IntoFuture {
        (self.run_async_io)()
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Transforms the result once it settles.
    pub fn fmap<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        AsyncIO::new(move || async move {
            let value = self.await;
            function(value)
        })
    }

    /// Chains a dependent computation.
    ///
    /// `function` is invoked only after this computation has settled, so the
    /// dependent computation is not even built before then.
    pub fn flat_map<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
        B: 'static,
    {
        AsyncIO::new(move || async move {
            let value = self.await;
            function(value).await
        })
    }
}
