//! Maybe type - optional presence as a closed two-case union.
//!
//! `Maybe<A>` is either `Nothing` or `Just(A)`. It is consumed through
//! [`Maybe::cases`], which requires a handler for both cases. A typical use
//! is request state that may or may not carry an authenticated principal yet.
//!
//! # Examples
//!
//! ```rust
//! use statebind::control::Maybe;
//!
//! let anonymous: Maybe<&str> = Maybe::nothing();
//! let known = Maybe::just("a@b.com");
//!
//! let greet = |user: Maybe<&str>| user.cases(|| "hello, stranger".to_string(), |email| format!("hello, {email}"));
//!
//! assert_eq!(greet(anonymous), "hello, stranger");
//! assert_eq!(greet(known), "hello, a@b.com");
//! ```

use std::fmt;

/// Optional presence of a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    Nothing,
    /// A present value.
    Just(A),
}

impl<A> Maybe<A> {
    /// Builds the empty case.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Builds the present case.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Eliminates the `Maybe` by applying the handler matching its case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(20).cases(|| 0, |x| x + 1), 21);
    /// assert_eq!(Maybe::<i32>::nothing().cases(|| 0, |x| x + 1), 0);
    /// ```
    #[inline]
    pub fn cases<T, F, G>(self, on_nothing: F, on_just: G) -> T
    where
        F: FnOnce() -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Nothing => on_nothing(),
            Self::Just(value) => on_just(value),
        }
    }

    /// Eliminates a borrowed `Maybe` without consuming it.
    #[inline]
    pub fn cases_ref<'a, T, F, G>(&'a self, on_nothing: F, on_just: G) -> T
    where
        F: FnOnce() -> T,
        G: FnOnce(&'a A) -> T,
    {
        match self {
            Self::Nothing => on_nothing(),
            Self::Just(value) => on_just(value),
        }
    }

    /// Applies a function to the present value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(function(value)),
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Nothing => None,
            Self::Just(value) => Some(value),
        }
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => formatter.write_str("Nothing"),
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
        }
    }
}
