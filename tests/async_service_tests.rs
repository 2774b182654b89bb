#![cfg(feature = "async")]
//! Unit tests for the asynchronous Service edition.
//!
//! The deferred edition has the same combinator contract as the synchronous
//! one, with outcomes delivered through a single-resolution `AsyncIO`.
//! Tests cover:
//! - Laws (identity, associativity, short-circuit, recovery)
//! - Ordering: a bound step is not started before its predecessor settles
//! - Lifting futures (`from_future`) and settled-once `AsyncIO`s (`lift_async_io`)

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rstest::rstest;
use statebind::control::Either;
use statebind::effect::{AsyncIO, Deferred, Service, kleisli};

type AsyncCounter = Service<i32, String, i32, Deferred>;

fn add_later(value: i32) -> AsyncCounter {
    Service::new(move |state: i32| {
        AsyncIO::new(move || async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            Either::Right((state + value, value * 2))
        })
    })
}

// =============================================================================
// Laws
// =============================================================================

#[rstest]
#[tokio::test]
async fn left_identity() {
    let left: AsyncCounter = Service::pure(5).bind(add_later);
    assert_eq!(left.run(1).await, add_later(5).run(1).await);
}

#[rstest]
#[tokio::test]
async fn right_identity() {
    let bound: AsyncCounter = add_later(3).bind(Service::pure);
    assert_eq!(bound.run(1).await, add_later(3).run(1).await);
}

#[rstest]
#[tokio::test]
async fn associativity() {
    let left = add_later(1).bind(add_later).bind(add_later);
    let right = add_later(1).bind(|x| add_later(x).bind(add_later));
    assert_eq!(left.run(0).await, right.run(0).await);
}

#[rstest]
#[tokio::test]
async fn error_short_circuits() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let service: AsyncCounter = Service::error("stop".to_string()).bind(move |x: i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        add_later(x)
    });

    assert_eq!(service.run(0).await, Either::Left("stop".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn recover_runs_handler_from_pre_failure_state() {
    let failing: AsyncCounter = Service::write_state(50).then(Service::error("lost".to_string()));
    let recovered = failing.recover(|message: String| {
        Service::read_state().map(move |state: i32| state + i32::try_from(message.len()).unwrap_or(0))
    });

    assert_eq!(recovered.run(10).await, Either::Right((10, 14)));
}

#[rstest]
#[tokio::test]
async fn map_error_transforms_failure() {
    let service: Service<i32, usize, i32, Deferred> =
        AsyncCounter::error("four".to_string()).map_error(|message: String| message.len());
    assert_eq!(service.eval(0).await, Either::Left(4));
}

#[rstest]
#[tokio::test]
async fn read_write_read_sees_new_state() {
    let service: AsyncCounter = Service::read_state()
        .bind(|_| Service::write_state(9))
        .bind(|()| Service::read_state());
    assert_eq!(service.run(1).await, Either::Right((9, 9)));
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[tokio::test]
async fn chained_steps_are_strictly_serialized() {
    let events = Arc::new(Mutex::new(Vec::new()));

    let step = |name: &'static str, events: Arc<Mutex<Vec<String>>>| -> Service<(), String, (), Deferred> {
        Service::new(move |state: ()| {
            let events = Arc::clone(&events);
            events.lock().unwrap().push(format!("{name} built"));
            AsyncIO::new(move || async move {
                events.lock().unwrap().push(format!("{name} started"));
                tokio::time::sleep(Duration::from_millis(5)).await;
                events.lock().unwrap().push(format!("{name} settled"));
                Either::Right((state, ()))
            })
        })
    };

    let a = step("a", Arc::clone(&events));
    let b = step("b", Arc::clone(&events));
    let c = step("c", Arc::clone(&events));
    let chain = a.then(b).then(c);

    let pending = chain.run(());
    let outcome = pending.await;

    assert_eq!(outcome, Either::Right(((), ())));
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            "a built",
            "a started",
            "a settled",
            "b built",
            "b started",
            "b settled",
            "c built",
            "c started",
            "c settled",
        ]
    );
}

#[rstest]
#[tokio::test]
async fn nothing_runs_before_await() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let service: AsyncCounter = Service::from_future(move || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(1)
        }
    });

    let pending = service.run(0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(pending.await, Either::Right((0, 1)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Lifting
// =============================================================================

#[rstest]
#[tokio::test]
async fn from_future_failure_enters_error_channel() {
    let service: AsyncCounter = Service::from_future(|| async { Err("fetch failed".to_string()) });
    let recovered = service.recover(|_| Service::pure(-1));
    assert_eq!(recovered.run(3).await, Either::Right((3, -1)));
}

#[rstest]
#[tokio::test]
async fn from_future_is_rerunnable() {
    let service: AsyncCounter = Service::from_future(|| async { Ok(8) });
    assert_eq!(service.run(1).await, Either::Right((1, 8)));
    assert_eq!(service.run(2).await, Either::Right((2, 8)));
}

#[rstest]
#[tokio::test]
async fn lift_async_io_replays_settled_value() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let io = AsyncIO::new(move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, String>("body")
    });
    let service: Service<u8, String, &str, Deferred> = Service::lift_async_io(io);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(service.run(1).await, Either::Right((1, "body")));
    assert_eq!(service.run(2).await, Either::Right((2, "body")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn lift_async_io_replays_failure() {
    let io = AsyncIO::pure(Err::<&str, _>("timeout".to_string()));
    let service: Service<(), String, &str, Deferred> = Service::lift_async_io(io);

    assert_eq!(service.eval(()).await, Either::Left("timeout".to_string()));
    assert_eq!(service.eval(()).await, Either::Left("timeout".to_string()));
}

#[rstest]
#[tokio::test]
async fn kleisli_composes_deferred_steps() {
    let composed = kleisli(add_later, add_later);
    assert_eq!(composed(2).run(0).await, Either::Right((6, 8)));
}
