//! Extension trait for `Future<Output = ErrorOr<T>>`.
//!
//! Lets combinator chains read fluently over futures without an `.await`
//! between every step, mirroring the inherent async combinators on
//! [`ErrorOr`] itself.

use core::future::Future;

use crate::types::{Error, ErrorVec};
use crate::ErrorOr;

/// Fluent combinators for futures resolving to an [`ErrorOr`].
///
/// Blanket-implemented for every `Future<Output = ErrorOr<T>>`, so any
/// async producer chains directly:
///
/// ```
/// use error_or::prelude_async::*;
/// use error_or::{Error, ErrorOr};
///
/// async fn fetch(id: u64) -> ErrorOr<u64> {
///     if id == 0 {
///         Error::not_found().into()
///     } else {
///         ErrorOr::from_value(id)
///     }
/// }
///
/// async fn example() -> String {
///     fetch(7)
///         .map_async(|id| async move { id * 10 })
///         .fold_async(
///             |value| async move { format!("ok: {value}") },
///             |errors| async move { format!("{} error(s)", errors.len()) },
///         )
///         .await
/// }
/// ```
///
/// Each adapter awaits the upstream future to completion before dispatching,
/// so a chain is a strictly sequential pipeline: an upstream failure
/// short-circuits every downstream success-branch callback without
/// constructing or suspending on it.
pub trait ErrorOrFutureExt<T>: Future<Output = ErrorOr<T>> + Sized {
    /// Chains [`ErrorOr::map_async`] onto this future.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Chains [`ErrorOr::and_then_async`] onto this future.
    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    /// Chains [`ErrorOr::or_else_async`] onto this future.
    fn or_else_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorVec<Error>) -> Fut,
        Fut: Future<Output = ErrorOr<T>>,
    {
        async move { self.await.or_else_async(f).await }
    }

    /// Chains [`ErrorOr::recover_async`] onto this future.
    fn recover_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorVec<Error>) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.recover_async(f).await }
    }

    /// Chains [`ErrorOr::switch_async`] onto this future.
    fn switch_async<V, VFut, E, EFut>(self, on_value: V, on_errors: E) -> impl Future<Output = ()>
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(ErrorVec<Error>) -> EFut,
        EFut: Future<Output = ()>,
    {
        async move { self.await.switch_async(on_value, on_errors).await }
    }

    /// Chains [`ErrorOr::switch_first_async`] onto this future.
    fn switch_first_async<V, VFut, E, EFut>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> impl Future<Output = ()>
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = ()>,
    {
        async move { self.await.switch_first_async(on_value, on_first_error).await }
    }

    /// Chains [`ErrorOr::fold_async`] onto this future.
    fn fold_async<R, V, VFut, E, EFut>(self, on_value: V, on_errors: E) -> impl Future<Output = R>
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(ErrorVec<Error>) -> EFut,
        EFut: Future<Output = R>,
    {
        async move { self.await.fold_async(on_value, on_errors).await }
    }

    /// Chains [`ErrorOr::fold_first_async`] onto this future.
    fn fold_first_async<R, V, VFut, E, EFut>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> impl Future<Output = R>
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = R>,
    {
        async move { self.await.fold_first_async(on_value, on_first_error).await }
    }
}

impl<Fut, T> ErrorOrFutureExt<T> for Fut where Fut: Future<Output = ErrorOr<T>> {}
