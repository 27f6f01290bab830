//! Tracing integration for error-or.
//!
//! Opt-in extensions that emit a `tracing` event for every error in the
//! failure branch, returning the container unchanged. The core performs no
//! logging of its own; this module is the only logging surface.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["tracing"] }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::ErrorOr;

/// Extension trait logging the failure branch of an [`ErrorOr`].
///
/// # Example
///
/// ```rust,ignore
/// use error_or::async_ext::ErrorOrTraceExt;
///
/// fn load(id: u64) -> ErrorOr<Config> {
///     read_config(id).trace_failures("load_config")
/// }
/// ```
pub trait ErrorOrTraceExt<T> {
    /// Emits one `error!` event per error when the container is a failure,
    /// tagged with `operation`, then returns the container unchanged.
    fn trace_failures(self, operation: &str) -> ErrorOr<T>;
}

impl<T> ErrorOrTraceExt<T> for ErrorOr<T> {
    fn trace_failures(self, operation: &str) -> ErrorOr<T> {
        for error in self.errors() {
            tracing::error!(
                operation,
                kind = ?error.kind(),
                code = error.code(),
                "{}",
                error.description(),
            );
        }
        self
    }
}

/// Extension trait for futures that logs the failure branch on resolution.
pub trait ErrorOrFutureTraceExt<T>: Future<Output = ErrorOr<T>> + Sized {
    /// Wraps this future so that a failure outcome is logged when it
    /// resolves; the container itself passes through unchanged.
    fn trace_failures(self, operation: &'static str) -> TraceFailuresFuture<Self> {
        TraceFailuresFuture { inner: self, operation }
    }
}

impl<Fut, T> ErrorOrFutureTraceExt<T> for Fut where Fut: Future<Output = ErrorOr<T>> {}

pin_project! {
    /// Future wrapper that logs the failure branch on completion.
    ///
    /// Created by [`ErrorOrFutureTraceExt::trace_failures`]. Cancel-safe if
    /// the inner future is cancel-safe; nothing is logged unless the inner
    /// future completes.
    #[must_use = "futures do nothing unless polled"]
    pub struct TraceFailuresFuture<Fut> {
        #[pin]
        inner: Fut,
        operation: &'static str,
    }
}

impl<Fut, T> Future for TraceFailuresFuture<Fut>
where
    Fut: Future<Output = ErrorOr<T>>,
{
    type Output = ErrorOr<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(outcome) => Poll::Ready(outcome.trace_failures(*this.operation)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<Fut, T> FusedFuture for TraceFailuresFuture<Fut>
where
    Fut: FusedFuture<Output = ErrorOr<T>>,
{
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}
