//! Inherent async combinators on [`ErrorOr`].
//!
//! The populated variant is inspected before any suspension, so the branch
//! not taken is never invoked and never awaited. Each method awaits at most
//! one caller-supplied future to completion; nothing is spawned and nothing
//! runs concurrently within a chain.

use core::future::Future;

use crate::error_or::core::{first_of, State};
use crate::types::{Error, ErrorVec};
use crate::ErrorOr;

impl<T> ErrorOr<T> {
    /// Async [`map`](ErrorOr::map): transforms the wrapped value through an
    /// async computation.
    ///
    /// On failure the error sequence passes through unchanged and `f` is
    /// never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// async fn example() -> ErrorOr<i32> {
    ///     ErrorOr::from_value(21).map_async(|x| async move { x * 2 }).await
    /// }
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.state {
            State::Value(value) => ErrorOr::from_value(f(value).await),
            State::Errors(errors) => ErrorOr::from_error_vec(errors),
        }
    }

    /// Async [`and_then`](ErrorOr::and_then): chains an async computation
    /// that may itself fail, flattening one level.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        match self.state {
            State::Value(value) => f(value).await,
            State::Errors(errors) => ErrorOr::from_error_vec(errors),
        }
    }

    /// Async [`or_else`](ErrorOr::or_else): substitutes the failure branch
    /// with another container produced asynchronously.
    pub async fn or_else_async<F, Fut>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce(ErrorVec<Error>) -> Fut,
        Fut: Future<Output = ErrorOr<T>>,
    {
        match self.state {
            State::Value(value) => ErrorOr::from_value(value),
            State::Errors(errors) => f(errors).await,
        }
    }

    /// Async [`recover`](ErrorOr::recover): substitutes the failure branch
    /// with a plain value produced asynchronously.
    pub async fn recover_async<F, Fut>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce(ErrorVec<Error>) -> Fut,
        Fut: Future<Output = T>,
    {
        match self.state {
            State::Value(value) => ErrorOr::from_value(value),
            State::Errors(errors) => ErrorOr::from_value(f(errors).await),
        }
    }

    /// Async [`switch`](ErrorOr::switch): terminal consumption with async
    /// callbacks; exactly one is invoked, exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// async fn example() {
    ///     ErrorOr::from_value("ready")
    ///         .switch_async(
    ///             |value| async move { assert_eq!(value, "ready") },
    ///             |_errors| async { unreachable!() },
    ///         )
    ///         .await;
    /// }
    /// ```
    pub async fn switch_async<V, VFut, E, EFut>(self, on_value: V, on_errors: E)
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(ErrorVec<Error>) -> EFut,
        EFut: Future<Output = ()>,
    {
        match self.state {
            State::Value(value) => on_value(value).await,
            State::Errors(errors) => on_errors(errors).await,
        }
    }

    /// Async [`switch_first`](ErrorOr::switch_first): the failure branch
    /// receives only the first error.
    pub async fn switch_first_async<V, VFut, E, EFut>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = ()>,
    {
        match self.state {
            State::Value(value) => on_value(value).await,
            State::Errors(errors) => on_first_error(first_of(errors)).await,
        }
    }

    /// Async [`fold`](ErrorOr::fold): terminal transformation producing a
    /// result from whichever branch ran.
    pub async fn fold_async<R, V, VFut, E, EFut>(self, on_value: V, on_errors: E) -> R
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(ErrorVec<Error>) -> EFut,
        EFut: Future<Output = R>,
    {
        match self.state {
            State::Value(value) => on_value(value).await,
            State::Errors(errors) => on_errors(errors).await,
        }
    }

    /// Async [`fold_first`](ErrorOr::fold_first): the failure branch
    /// receives only the first error.
    pub async fn fold_first_async<R, V, VFut, E, EFut>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = R>,
    {
        match self.state {
            State::Value(value) => on_value(value).await,
            State::Errors(errors) => on_first_error(first_of(errors)).await,
        }
    }
}
