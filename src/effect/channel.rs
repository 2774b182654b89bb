//! Result channels - how a step's outcome is delivered.
//!
//! Rust has no Higher-Kinded Types, so the "container" a `Service` step
//! returns its outcome in is described with a Generic Associated Type: a
//! [`Channel`] names a type constructor `Of<T>` together with the two
//! operations the combinators need, lifting a ready value and chaining a
//! continuation after the value settles.
//!
//! - [`Immediate`]: `Of<T> = T`. The outcome is returned synchronously and
//!   every step runs to completion before control returns.
//! - [`Deferred`]: `Of<T> = AsyncIO<T>`. The outcome settles later, exactly
//!   once, and a continuation is not built until it has settled.
//!
//! One `Service` implementation serves both editions by being generic over
//! the channel.

#[cfg(feature = "async")]
use super::AsyncIO;

/// A capability describing how an outcome of type `T` is delivered.
///
/// # Laws
///
/// For any channel `C`:
///
/// 1. **Left Identity**: `C::chain(C::resolve(a), f) == f(a)`
/// 2. **Right Identity**: `C::chain(m, C::resolve) == m`
/// 3. **Sequencing**: the continuation passed to `chain` is invoked at most
///    once, and only after the input channel has settled.
pub trait Channel: 'static {
    /// The channel applied to an outcome type.
    type Of<T>;

    /// Delivers an already available value.
    fn resolve<T>(value: T) -> Self::Of<T>
    where
        T: Send + 'static;

    /// Feeds the settled value of `channel` into `continuation`.
    fn chain<T, U, F>(channel: Self::Of<T>, continuation: F) -> Self::Of<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> Self::Of<U> + Send + 'static;

    /// Transforms the settled value of `channel`.
    fn map<T, U, F>(channel: Self::Of<T>, function: F) -> Self::Of<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Self::chain::<T, U, _>(channel, move |value| Self::resolve::<U>(function(value)))
    }
}

/// The synchronous channel: outcomes are plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Immediate;

impl Channel for Immediate {
    type Of<T> = T;

    #[inline]
    fn resolve<T>(value: T) -> T
    where
        T: Send + 'static,
    {
        value
    }

    #[inline]
    fn chain<T, U, F>(channel: T, continuation: F) -> U
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        continuation(channel)
    }
}

/// The asynchronous channel: outcomes are single-resolution [`AsyncIO`]s.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deferred;

#[cfg(feature = "async")]
impl Channel for Deferred {
    type Of<T> = AsyncIO<T>;

    #[inline]
    fn resolve<T>(value: T) -> AsyncIO<T>
    where
        T: Send + 'static,
    {
        AsyncIO::pure(value)
    }

    #[inline]
    fn chain<T, U, F>(channel: AsyncIO<T>, continuation: F) -> AsyncIO<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> AsyncIO<U> + Send + 'static,
    {
        channel.flat_map(continuation)
    }
}
