//! Tests for the tracing extension: logging must never alter the container.

use error_or::async_ext::{ErrorOrFutureTraceExt, ErrorOrTraceExt, TraceFailuresFuture};
use error_or::{errors, Error, ErrorOr};

#[test]
fn trace_failures_returns_the_container_unchanged() {
    let failure: ErrorOr<i32> = errors![Error::validation(), Error::conflict()];
    let expected = failure.clone();

    assert_eq!(failure.trace_failures("lookup"), expected);
}

#[test]
fn trace_failures_passes_success_through() {
    let success = ErrorOr::from_value(7);
    assert_eq!(success.clone().trace_failures("lookup"), success);
}

#[tokio::test]
async fn trace_failures_future_resolves_to_the_same_outcome() {
    let outcome = async { ErrorOr::<i32>::from(Error::not_found()) }
        .trace_failures("fetch_user")
        .await;

    assert!(outcome.is_error());
    assert_eq!(*outcome.first_error(), Error::not_found());
}

#[test]
fn trace_failures_future_is_send_and_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<TraceFailuresFuture<std::future::Ready<ErrorOr<i32>>>>();
    assert_sync::<TraceFailuresFuture<std::future::Ready<ErrorOr<i32>>>>();
}
