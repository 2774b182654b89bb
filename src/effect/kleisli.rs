//! Kleisli composition of service-producing functions.

use std::sync::Arc;

use super::{Channel, Service};

/// Composes two service-producing functions end to end.
///
/// `kleisli(g, f)` is `move |input| f(input).bind(g)`: `f` runs first and
/// its value is fed to `g`, state threading through both. Like function
/// composition the second stage is named first. Associativity follows from
/// the associativity of [`Service::bind`].
///
/// # Examples
///
/// ```rust
/// use statebind::control::Either;
/// use statebind::effect::{Service, kleisli};
///
/// let parse = |text: String| -> Service<u32, String, u32> {
///     match text.parse::<u32>() {
///         Ok(number) => Service::pure(number),
///         Err(_) => Service::error(format!("not a number: {text}")),
///     }
/// };
/// let accumulate = |number: u32| -> Service<u32, String, u32> {
///     Service::modify_state(move |total: u32| total + number).then_read_state()
/// };
///
/// let parse_and_accumulate = kleisli(accumulate, parse);
///
/// assert_eq!(parse_and_accumulate("5".to_string()).run(10), Either::Right((15, 15)));
/// assert_eq!(
///     parse_and_accumulate("five".to_string()).run(10),
///     Either::Left("not a number: five".to_string())
/// );
/// ```
pub fn kleisli<X, B, Y, S, E, C, F, G>(
    second: G,
    first: F,
) -> impl Fn(X) -> Service<S, E, Y, C> + Send + Sync + 'static
where
    X: 'static,
    B: Send + 'static,
    Y: Send + 'static,
    S: Send + 'static,
    E: Send + 'static,
    C: Channel,
    F: Fn(X) -> Service<S, E, B, C> + Send + Sync + 'static,
    G: Fn(B) -> Service<S, E, Y, C> + Send + Sync + 'static,
{
    let second = Arc::new(second);
    move |input| {
        let second = Arc::clone(&second);
        first(input).bind(move |value| second(value))
    }
}
