//! Unit tests for Either<L, R> type.
//!
//! Either is a closed two-case union:
//! - `Left(L)`: conventionally a failure
//! - `Right(R)`: conventionally a success
//!
//! It carries every Service outcome, so these tests focus on the
//! elimination and mapping operations pipelines rely on.

#![cfg(feature = "control")]

use rstest::rstest;
use statebind::control::Either;

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
#[case(Either::Left(3), "left 3")]
#[case(Either::Right("x".to_string()), "right x")]
fn cases_invokes_exactly_one_handler(#[case] value: Either<i32, String>, #[case] expected: &str) {
    let described = value.cases(|number| format!("left {number}"), |text| format!("right {text}"));
    assert_eq!(described, expected);
}

#[rstest]
fn cases_ref_leaves_value_usable() {
    let value: Either<String, Vec<i32>> = Either::Right(vec![1, 2, 3]);
    let length = value.cases_ref(String::len, Vec::len);
    assert_eq!(length, 3);
    assert_eq!(value, Either::Right(vec![1, 2, 3]));
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_right_skips_left() {
    let value: Either<&str, i32> = Either::Left("failed");
    assert_eq!(value.map_right(|x| x + 1), Either::Left("failed"));
}

#[rstest]
fn map_left_skips_right() {
    let value: Either<&str, i32> = Either::Right(1);
    assert_eq!(value.map_left(str::len), Either::Right(1));
}

#[rstest]
#[case(Either::Left(2), Either::Left(4))]
#[case(Either::Right("ab"), Either::Right(2))]
fn bimap_maps_the_present_side(#[case] value: Either<i32, &str>, #[case] expected: Either<i32, usize>) {
    assert_eq!(value.bimap(|x| x * 2, str::len), expected);
}

#[rstest]
fn swap_exchanges_sides() {
    let value: Either<i32, &str> = Either::Left(1);
    assert_eq!(value.swap(), Either::Right(1));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn result_conversions_round_trip() {
    let failure: Either<String, i32> = Err("bad".to_string()).into();
    assert_eq!(failure, Either::Left("bad".to_string()));
    assert_eq!(failure.into_result(), Err("bad".to_string()));

    let success: Result<i32, String> = Either::Right(5).into();
    assert_eq!(success, Ok(5));
}

// =============================================================================
// Formatting
// =============================================================================

#[rstest]
fn debug_and_display_name_the_case() {
    let left: Either<i32, i32> = Either::Left(1);
    let right: Either<i32, i32> = Either::Right(2);
    assert_eq!(format!("{left:?}"), "Left(1)");
    assert_eq!(format!("{right}"), "Right(2)");
}
