//! Tests for the inherent async combinators, including the concrete
//! switch/fold scenarios over a `Person` value.

use std::sync::atomic::{AtomicU32, Ordering};

use error_or::{errors, Error, ErrorOr};

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: &'static str,
}

impl Person {
    fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[tokio::test]
async fn switch_async_on_success_runs_only_the_value_branch() {
    let value_calls = AtomicU32::new(0);
    let outcome = ErrorOr::from_value(Person::new("Amichai"));

    outcome
        .switch_async(
            |person| {
                value_calls.fetch_add(1, Ordering::SeqCst);
                async move { assert_eq!(person, Person::new("Amichai")) }
            },
            |_errors| async { panic!("error branch must not run") },
        )
        .await;

    assert_eq!(value_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn switch_async_on_failure_receives_the_full_sequence_in_order() {
    let error_calls = AtomicU32::new(0);
    let outcome: ErrorOr<Person> = errors![Error::validation(), Error::conflict()];

    outcome
        .switch_async(
            |_person| async { panic!("value branch must not run") },
            |errors| {
                error_calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    assert_eq!(errors.as_slice(), &[Error::validation(), Error::conflict()]);
                }
            },
        )
        .await;

    assert_eq!(error_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn switch_first_async_on_success_runs_only_the_value_branch() {
    let outcome = ErrorOr::from_value(Person::new("Amichai"));

    outcome
        .switch_first_async(
            |person| async move { assert_eq!(person, Person::new("Amichai")) },
            |_first| async { panic!("first-error branch must not run") },
        )
        .await;
}

#[tokio::test]
async fn switch_first_async_on_failure_receives_only_the_first_error() {
    let outcome: ErrorOr<Person> = errors![Error::validation(), Error::conflict()];

    outcome
        .switch_first_async(
            |_person| async { panic!("value branch must not run") },
            |first| async move { assert_eq!(first, Error::validation()) },
        )
        .await;
}

#[tokio::test]
async fn map_async_transforms_on_success() {
    let outcome = ErrorOr::from_value(21).map_async(|x| async move { x * 2 }).await;
    assert_eq!(*outcome.value(), 42);
}

#[tokio::test]
async fn map_async_short_circuits_without_invoking_the_callback() {
    let calls = AtomicU32::new(0);
    let original: ErrorOr<i32> = errors![Error::validation(), Error::conflict()];
    let expected = original.errors().to_vec();

    let outcome = original
        .map_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { x }
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.errors(), expected.as_slice());
}

#[tokio::test]
async fn and_then_async_flattens_and_short_circuits() {
    let success = ErrorOr::from_value(4)
        .and_then_async(|x| async move { ErrorOr::from_value(x + 1) })
        .await;
    assert_eq!(*success.value(), 5);

    let calls = AtomicU32::new(0);
    let failure: ErrorOr<i32> = Error::not_found().into();
    let outcome = failure
        .and_then_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { ErrorOr::from_value(x) }
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(*outcome.first_error(), Error::not_found());
}

#[tokio::test]
async fn or_else_async_substitutes_only_on_failure() {
    let calls = AtomicU32::new(0);

    let success = ErrorOr::from_value(1)
        .or_else_async(|errors| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { ErrorOr::from_errors(errors) }
        })
        .await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(*success.value(), 1);

    let failure: ErrorOr<i32> = Error::failure().into();
    let substituted = failure
        .or_else_async(|_errors| async { ErrorOr::from_value(0) })
        .await;
    assert_eq!(*substituted.value(), 0);
}

#[tokio::test]
async fn recover_async_lands_in_success_state() {
    let outcome: ErrorOr<usize> = errors![Error::validation(), Error::conflict()];
    let recovered = outcome.recover_async(|errors| async move { errors.len() }).await;

    assert_eq!(*recovered.value(), 2);
}

#[tokio::test]
async fn fold_async_produces_from_the_selected_branch() {
    let success = ErrorOr::from_value(2)
        .fold_async(
            |x| async move { x * 10 },
            |errors| async move { errors.len() as i32 },
        )
        .await;
    assert_eq!(success, 20);

    let failure: ErrorOr<i32> = errors![Error::validation(), Error::conflict()];
    let folded = failure
        .fold_async(
            |x| async move { x * 10 },
            |errors| async move { errors.len() as i32 },
        )
        .await;
    assert_eq!(folded, 2);
}

#[tokio::test]
async fn fold_first_async_dispatches_on_first_error() {
    let outcome: ErrorOr<i32> = errors![Error::unauthorized(), Error::forbidden()];

    let code = outcome
        .fold_first_async(
            |_value| async { String::new() },
            |first| async move { first.code().to_string() },
        )
        .await;

    assert_eq!(code, "General.Unauthorized");
}
