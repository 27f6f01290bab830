//! Synchronous combinators over [`ErrorOr`].
//!
//! Every combinator is pure dispatch on the populated variant: the branch
//! not selected is never invoked, and a failure's error sequence passes
//! through transform combinators untouched and in order. Panics raised
//! inside caller-supplied closures are not caught anywhere in a chain.

use super::core::{first_of, ErrorOr, State};
use crate::types::{Error, ErrorVec};

impl<T> ErrorOr<T> {
    /// Transforms the wrapped value, wrapping the output in a new success
    /// container.
    ///
    /// On failure the same error sequence is returned unchanged and `f` is
    /// never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// let doubled = ErrorOr::from_value(21).map(|x| x * 2);
    /// assert_eq!(*doubled.value(), 42);
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Value(value) => ErrorOr::from_value(f(value)),
            State::Errors(errors) => ErrorOr::from_error_vec(errors),
        }
    }

    /// Chains a computation that may itself fail, flattening one level.
    ///
    /// Monadic bind: on success the next container is whatever `f` returns;
    /// on failure the chain short-circuits and `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// fn positive(x: i32) -> ErrorOr<i32> {
    ///     if x > 0 {
    ///         ErrorOr::from_value(x)
    ///     } else {
    ///         Error::validation().into()
    ///     }
    /// }
    ///
    /// assert!(!ErrorOr::from_value(3).and_then(positive).is_error());
    /// assert!(ErrorOr::from_value(-3).and_then(positive).is_error());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> ErrorOr<U>,
    {
        match self.state {
            State::Value(value) => f(value),
            State::Errors(errors) => ErrorOr::from_error_vec(errors),
        }
    }

    /// Substitutes the failure branch with another container, which may
    /// itself be a failure.
    ///
    /// On success the receiver passes through unchanged and `f` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let recovered: ErrorOr<i32> = ErrorOr::from(Error::not_found())
    ///     .or_else(|_errors| ErrorOr::from_value(0));
    /// assert_eq!(*recovered.value(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce(ErrorVec<Error>) -> ErrorOr<T>,
    {
        match self.state {
            State::Value(value) => ErrorOr::from_value(value),
            State::Errors(errors) => f(errors),
        }
    }

    /// Substitutes the failure branch with a plain value, always landing in
    /// the success state.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let recovered = ErrorOr::<usize>::from(Error::failure())
    ///     .recover(|errors| errors.len());
    /// assert_eq!(*recovered.value(), 1);
    /// ```
    #[must_use]
    #[inline]
    pub fn recover<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce(ErrorVec<Error>) -> T,
    {
        match self.state {
            State::Value(value) => ErrorOr::from_value(value),
            State::Errors(errors) => ErrorOr::from_value(f(errors)),
        }
    }

    /// Substitutes the failure branch with a fixed value.
    #[must_use]
    #[inline]
    pub fn or_value(self, value: T) -> ErrorOr<T> {
        match self.state {
            State::Value(existing) => ErrorOr::from_value(existing),
            State::Errors(_) => ErrorOr::from_value(value),
        }
    }

    /// Terminal consumption: invokes exactly one callback exactly once.
    ///
    /// `on_value` receives the value iff the container is a success;
    /// `on_errors` receives the full error sequence iff it is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// ErrorOr::from_value("ready").switch(
    ///     |value| assert_eq!(value, "ready"),
    ///     |_errors| unreachable!(),
    /// );
    /// ```
    #[inline]
    pub fn switch<V, E>(self, on_value: V, on_errors: E)
    where
        V: FnOnce(T),
        E: FnOnce(ErrorVec<Error>),
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_errors(errors),
        }
    }

    /// Like [`switch`](ErrorOr::switch), but the failure branch receives
    /// only the first error.
    #[inline]
    pub fn switch_first<V, E>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T),
        E: FnOnce(Error),
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_first_error(first_of(errors)),
        }
    }

    /// Terminal transformation: produces a result from whichever branch is
    /// populated.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let label = ErrorOr::<i32>::from(Error::unauthorized())
    ///     .fold(|value| format!("ok: {value}"), |errors| format!("{} error(s)", errors.len()));
    /// assert_eq!(label, "1 error(s)");
    /// ```
    #[inline]
    pub fn fold<R, V, E>(self, on_value: V, on_errors: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(ErrorVec<Error>) -> R,
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_errors(errors),
        }
    }

    /// Like [`fold`](ErrorOr::fold), but the failure branch receives only
    /// the first error.
    #[inline]
    pub fn fold_first<R, V, E>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_first_error(first_of(errors)),
        }
    }
}
