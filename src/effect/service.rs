//! `Service` - a re-runnable, state-threading, short-circuiting computation.
//!
//! `Service<S, E, A, C>` encapsulates a step function
//! `S -> C::Of<Either<E, (S, A)>>`: given a state it produces, through the
//! result channel `C`, either a failure `E` or a success carrying the
//! successor state and a value.
//!
//! A `Service` is immutable and does nothing until [`Service::run`] is
//! called. Every combinator returns a new `Service` wrapping a new step
//! function; the receiver's step is shared, never modified.
//!
//! # Editions
//!
//! - `Service<S, E, A>` (channel [`Immediate`]) runs synchronously and
//!   returns an [`Either`].
//! - `Service<S, E, A, Deferred>` returns an [`AsyncIO`] that settles once.
//!   A bound step is not built, let alone started, before the step it
//!   depends on has settled.
//!
//! # Laws
//!
//! 1. **Left Identity**: `Service::pure(a).bind(f) == f(a)`
//! 2. **Right Identity**: `m.bind(Service::pure) == m`
//! 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//! 4. **Short-circuit**: `Service::error(e).bind(f)` never invokes `f`
//! 5. **Recovery**: `Service::error(e).recover(h) == h(e)` run from the
//!    state the failing service was started with
//!
//! # Examples
//!
//! ```rust
//! use statebind::control::Either;
//! use statebind::effect::Service;
//!
//! let login: Service<Option<String>, String, ()> =
//!     Service::write_state(Some("a@b.com".to_string()));
//! let whoami: Service<Option<String>, String, String> = login
//!     .then(Service::read_state())
//!     .bind(|user: Option<String>| match user {
//!         Some(email) => Service::pure(email),
//!         None => Service::error("anonymous".to_string()),
//!     });
//!
//! assert_eq!(
//!     whoami.run(None),
//!     Either::Right((Some("a@b.com".to_string()), "a@b.com".to_string()))
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use crate::control::Either;

use super::channel::{Channel, Immediate};

#[cfg(feature = "async")]
use std::future::Future;

#[cfg(feature = "async")]
use std::future::IntoFuture;

#[cfg(feature = "async")]
use futures::FutureExt;

#[cfg(feature = "async")]
use super::AsyncIO;
#[cfg(feature = "async")]
use super::channel::Deferred;

/// The outcome of one run: a failure, or the successor state and a value.
pub type Outcome<S, E, A> = Either<E, (S, A)>;

type Step<S, E, A, C> = dyn Fn(S) -> <C as Channel>::Of<Outcome<S, E, A>> + Send + Sync;

/// A deferred computation over state `S` that fails with `E` or yields `A`,
/// delivering its outcome through channel `C`.
///
/// # Type Parameters
///
/// - `S`: The state threaded through the steps
/// - `E`: The failure type
/// - `A`: The success value type
/// - `C`: The result channel, [`Immediate`] by default
pub struct Service<S, E, A, C: Channel = Immediate> {
    /// The shared step function. Uses `Arc` so combinators and clones can
    /// reuse it without copying.
    step: Arc<Step<S, E, A, C>>,
}

// =============================================================================
// Construction and Execution
// =============================================================================

impl<S, E, A, C> Service<S, E, A, C>
where
    S: Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
    C: Channel,
{
    /// Creates a `Service` from a step function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::control::Either;
    /// use statebind::effect::Service;
    ///
    /// let halve: Service<i32, String, i32> = Service::new(|state: i32| {
    ///     if state % 2 == 0 {
    ///         Either::Right((state / 2, state))
    ///     } else {
    ///         Either::Left(format!("{state} is odd"))
    ///     }
    /// });
    ///
    /// assert_eq!(halve.run(8), Either::Right((4, 8)));
    /// assert_eq!(halve.run(3), Either::Left("3 is odd".to_string()));
    /// ```
    pub fn new<F>(step: F) -> Self
    where
        F: Fn(S) -> C::Of<Outcome<S, E, A>> + Send + Sync + 'static,
    {
        Self {
            step: Arc::new(step),
        }
    }

    /// Runs the computation from `initial_state`.
    ///
    /// The same `Service` may be run any number of times; each run is an
    /// independent transition.
    pub fn run(&self, initial_state: S) -> C::Of<Outcome<S, E, A>> {
        (self.step)(initial_state)
    }

    /// Runs the computation and keeps only the value.
    pub fn eval(&self, initial_state: S) -> C::Of<Either<E, A>> {
        C::map::<Outcome<S, E, A>, Either<E, A>, _>(self.run(initial_state), |outcome| {
            outcome.map_right(|(_, value)| value)
        })
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> C::Of<Either<E, S>> {
        C::map::<Outcome<S, E, A>, Either<E, S>, _>(self.run(initial_state), |outcome| {
            outcome.map_right(|(state, _)| state)
        })
    }

    /// Lifts a value. Always succeeds and leaves the state unchanged.
    ///
    /// This is the identity element of [`bind`](Self::bind).
    #[doc(alias = "return")]
    pub fn pure(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move |state| C::resolve::<Outcome<S, E, A>>(Either::Right((state, value.clone()))))
    }

    /// Lifts a failure. Leaves the state unchanged and short-circuits every
    /// step bound after it.
    pub fn error(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move |_| C::resolve::<Outcome<S, E, A>>(Either::Left(error.clone())))
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Runs this service, then feeds its value into `function` and runs the
    /// resulting service from the updated state.
    ///
    /// On failure the error is propagated untouched and `function` is not
    /// invoked.
    ///
    /// In the synchronous edition each bound step runs one stack frame deeper
    /// than the step before it, so a chain of tens of thousands of `bind`s
    /// can exhaust a thread's stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::control::Either;
    /// use statebind::effect::Service;
    ///
    /// let next: Service<i32, String, i32> = Service::read_state()
    ///     .bind(|count: i32| Service::write_state(count + 1).map(move |()| count));
    ///
    /// assert_eq!(next.run(1), Either::Right((2, 1)));
    /// ```
    pub fn bind<B, F>(self, function: F) -> Service<S, E, B, C>
    where
        B: Send + 'static,
        F: Fn(A) -> Service<S, E, B, C> + Send + Sync + 'static,
    {
        let step = self.step;
        let function = Arc::new(function);
        Service::new(move |state| {
            let function = Arc::clone(&function);
            C::chain::<Outcome<S, E, A>, Outcome<S, E, B>, _>(step(state), move |outcome| {
                match outcome {
                    Either::Left(error) => C::resolve::<Outcome<S, E, B>>(Either::Left(error)),
                    Either::Right((next_state, value)) => function(value).run(next_state),
                }
            })
        })
    }

    /// Runs this service, then `next`, keeping the value of `next`.
    #[must_use]
    pub fn then<B>(self, next: Service<S, E, B, C>) -> Service<S, E, B, C>
    where
        B: Send + 'static,
    {
        self.bind(move |_| next.clone())
    }

    /// Transforms the success value.
    ///
    /// Behaves like `bind` followed by `pure`, without requiring `B: Clone`.
    pub fn map<B, F>(self, function: F) -> Service<S, E, B, C>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let step = self.step;
        let function = Arc::new(function);
        Service::new(move |state| {
            let function = Arc::clone(&function);
            C::map::<Outcome<S, E, A>, Outcome<S, E, B>, _>(step(state), move |outcome| {
                outcome.map_right(|(next_state, value)| (next_state, function(value)))
            })
        })
    }

    // =========================================================================
    // Failure Channel
    // =========================================================================

    /// On failure, builds a substitute service from the error and runs it
    /// from the state this service was started with. Success passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::control::Either;
    /// use statebind::effect::Service;
    ///
    /// let fragile: Service<i32, String, i32> = Service::write_state(99)
    ///     .then(Service::error("boom".to_string()));
    /// let recovered = fragile.recover(|message: String| Service::pure(message.len() as i32));
    ///
    /// // The write to 99 happened inside the failed attempt and is discarded.
    /// assert_eq!(recovered.run(1), Either::Right((1, 4)));
    /// ```
    #[must_use]
    pub fn recover<F>(self, handler: F) -> Self
    where
        S: Clone,
        F: Fn(E) -> Self + Send + Sync + 'static,
    {
        let step = self.step;
        let handler = Arc::new(handler);
        Self::new(move |state: S| {
            let handler = Arc::clone(&handler);
            let pre_failure_state = state.clone();
            C::chain::<Outcome<S, E, A>, Outcome<S, E, A>, _>(step(state), move |outcome| {
                match outcome {
                    Either::Left(error) => handler(error).run(pre_failure_state),
                    success @ Either::Right(_) => C::resolve::<Outcome<S, E, A>>(success),
                }
            })
        })
    }

    /// Transforms the failure value, leaving success untouched.
    pub fn map_error<E2, F>(self, function: F) -> Service<S, E2, A, C>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let step = self.step;
        let function = Arc::new(function);
        Service::new(move |state| {
            let function = Arc::clone(&function);
            C::map::<Outcome<S, E, A>, Outcome<S, E2, A>, _>(step(state), move |outcome| {
                outcome.map_left(|error| function(error))
            })
        })
    }

    // =========================================================================
    // State Access After a Step
    // =========================================================================

    /// Runs this service, then yields the current state as the value.
    #[must_use]
    pub fn then_read_state(self) -> Service<S, E, S, C>
    where
        S: Clone,
    {
        self.then(Service::read_state())
    }

    /// Runs this service, then replaces the state with `new_state`, keeping
    /// this service's value.
    #[must_use]
    pub fn then_write_state(self, new_state: S) -> Self
    where
        S: Clone + Sync,
    {
        let step = self.step;
        Self::new(move |state| {
            let new_state = new_state.clone();
            C::map::<Outcome<S, E, A>, Outcome<S, E, A>, _>(step(state), move |outcome| {
                outcome.map_right(|(_, value)| (new_state, value))
            })
        })
    }
}

// =============================================================================
// State Accessors
// =============================================================================

impl<S, E, C> Service<S, E, S, C>
where
    S: Clone + Send + 'static,
    E: Send + 'static,
    C: Channel,
{
    /// Yields the current state as the value, without changing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::control::Either;
    /// use statebind::effect::Service;
    ///
    /// let read: Service<&str, (), &str> = Service::read_state();
    /// assert_eq!(read.run("current"), Either::Right(("current", "current")));
    /// ```
    #[must_use]
    pub fn read_state() -> Self {
        Self::new(|state: S| {
            let value = state.clone();
            C::resolve::<Outcome<S, E, S>>(Either::Right((state, value)))
        })
    }
}

impl<S, E, C> Service<S, E, (), C>
where
    S: Send + 'static,
    E: Send + 'static,
    C: Channel,
{
    /// Replaces the state with `new_state` and yields `()`.
    pub fn write_state(new_state: S) -> Self
    where
        S: Clone + Sync,
    {
        Self::new(move |_| C::resolve::<Outcome<S, E, ()>>(Either::Right((new_state.clone(), ()))))
    }

    /// Replaces the state with `modifier(state)` and yields `()`.
    pub fn modify_state<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::new(move |state| C::resolve::<Outcome<S, E, ()>>(Either::Right((modifier(state), ()))))
    }
}

// =============================================================================
// Asynchronous Lifting
// =============================================================================

#[cfg(feature = "async")]
impl<S, E, A> Service<S, E, A, Deferred>
where
    S: Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Lifts an asynchronous producer into the deferred edition.
    ///
    /// `factory` is invoked once per run, and only when the run reaches this
    /// step; the state is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use statebind::control::Either;
    /// use statebind::effect::{Deferred, Service};
    ///
    /// let fetch: Service<u8, String, &str, Deferred> =
    ///     Service::from_future(|| async { Ok("payload") });
    /// assert_eq!(fetch.run(0).await, Either::Right((0, "payload")));
    /// ```
    pub fn from_future<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        let factory = Arc::new(factory);
        Self::new(move |state| {
            let factory = Arc::clone(&factory);
            AsyncIO::new(move || async move {
                Either::from(factory().await).map_right(|value| (state, value))
            })
        })
    }

    /// Lifts an `AsyncIO` producing a `Result`.
    ///
    /// `io` starts the first time a run reaches this step. Its settled value
    /// is kept, so every later run observes the same outcome without
    /// starting `io` again. The state is left unchanged.
    pub fn lift_async_io(io: AsyncIO<Result<A, E>>) -> Self
    where
        A: Clone + Sync,
        E: Clone + Sync,
    {
        let settled = io.into_future().shared();
        Self::new(move |state| {
            AsyncIO::from_future(settled.clone())
                .fmap(move |result| Either::from(result).map_right(|value| (state, value)))
        })
    }
}

// =============================================================================
// Clone / Debug
// =============================================================================

impl<S, E, A, C: Channel> Clone for Service<S, E, A, C> {
    fn clone(&self) -> Self {
        Self {
            step: Arc::clone(&self.step),
        }
    }
}

impl<S, E, A, C: Channel> fmt::Debug for Service<S, E, A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Service").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Service<String, String, String>: Send, Sync, Clone);
