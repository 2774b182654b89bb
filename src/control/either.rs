//! Either type - a value that is exactly one of two cases.
//!
//! `Either<L, R>` is the synchronous result channel of a
//! [`Service`](crate::effect::Service) step: `Left` carries a failure,
//! `Right` carries a success. It is closed: there are exactly two cases and
//! the only way to observe a value is to supply a handler for each of them
//! with [`Either::cases`] (or an exhaustive `match`).
//!
//! # Examples
//!
//! ```rust
//! use statebind::control::Either;
//!
//! let failure: Either<String, i32> = Either::left("denied".to_string());
//! let success: Either<String, i32> = Either::right(42);
//!
//! let describe = |value: Either<String, i32>| {
//!     value.cases(
//!         |message| format!("failed: {message}"),
//!         |number| format!("got {number}"),
//!     )
//! };
//!
//! assert_eq!(describe(failure), "failed: denied");
//! assert_eq!(describe(success), "got 42");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` represents failure and `Right` represents success.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left case, conventionally a failure.
    Left(L),
    /// The right case, conventionally a success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds the left case.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Builds the right case.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Either` by applying the handler matching its case.
    ///
    /// Exactly one of the two handlers is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::control::Either;
    ///
    /// let value: Either<i32, &str> = Either::right("four");
    /// assert_eq!(value.cases(|number| number * 2, |text| text.len() as i32), 4);
    /// ```
    #[inline]
    pub fn cases<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Eliminates a borrowed `Either` without consuming it.
    #[inline]
    pub fn cases_ref<'a, T, F, G>(&'a self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(&'a L) -> T,
        G: FnOnce(&'a R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value, leaving a right value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::control::Either;
    ///
    /// let value: Either<i32, String> = Either::left(21);
    /// assert_eq!(value.map_left(|x| x * 2), Either::left(42));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, leaving a left value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::control::Either;
    ///
    /// let value: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(value.map_right(|s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the case, keeping the case.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Swaps the cases.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a `Result`, `Right` becoming `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `Err` carrying the left value if this is `Left`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn cases_invokes_only_the_left_handler() {
        let value: Either<i32, String> = Either::left(7);
        let mut right_calls = 0;
        let result = value.cases(|number| number + 1, |_| {
            right_calls += 1;
            0
        });
        assert_eq!(result, 8);
        assert_eq!(right_calls, 0);
    }

    #[rstest]
    fn cases_ref_leaves_value_usable() {
        let value: Either<i32, String> = Either::right("kept".to_string());
        let length = value.cases_ref(|_| 0, |text| text.len());
        assert_eq!(length, 4);
        assert_eq!(value, Either::right("kept".to_string()));
    }

    #[rstest]
    #[case(Ok(3), Either::Right(3))]
    #[case(Err("bad"), Either::Left("bad"))]
    fn from_result_maps_ok_to_right(
        #[case] input: Result<i32, &'static str>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        assert_eq!(Either::from(input), expected);
    }

    #[rstest]
    fn swap_exchanges_cases() {
        let value: Either<i32, &str> = Either::left(1);
        assert_eq!(value.swap(), Either::<&str, i32>::right(1));
    }

    #[rstest]
    fn display_shows_case_name() {
        let value: Either<i32, String> = Either::left(42);
        assert_eq!(format!("{value}"), "Left(42)");
    }
}
