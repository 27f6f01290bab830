use smallvec::smallvec;

use crate::types::alloc_type::Vec;
use crate::types::{Error, ErrorVec};

/// A discriminated union holding either one value of type `T` or an ordered,
/// non-empty sequence of [`Error`]s.
///
/// Exactly one variant is populated at any time, and the error sequence is
/// never empty; [`ErrorOr::from_errors`] rejects an empty input at
/// construction. Error order is the order in which errors were supplied and
/// is preserved through every combinator that does not explicitly replace the
/// set.
///
/// Instances are immutable: every combinator consumes the receiver and
/// returns a new container. The type owns no external resources and contains
/// no interior mutability, so it is freely shareable across threads whenever
/// `T` is.
///
/// # Accessor policy
///
/// [`value`](ErrorOr::value) on a failure container and
/// [`first_error`](ErrorOr::first_error) on a success container are
/// programmer errors and panic. Use [`try_value`](ErrorOr::try_value) /
/// [`try_first_error`](ErrorOr::try_first_error) when the state is not
/// already known.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorOr};
///
/// let success = ErrorOr::from_value(42);
/// assert!(!success.is_error());
/// assert_eq!(*success.value(), 42);
///
/// let failure: ErrorOr<i32> = ErrorOr::from_error(Error::conflict());
/// assert!(failure.is_error());
/// assert_eq!(failure.first_error().code(), "General.Conflict");
/// ```
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorOr<T> {
    pub(crate) state: State<T>,
}

/// Private so the non-empty invariant on `Errors` cannot be broken from
/// outside the crate.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum State<T> {
    Value(T),
    Errors(ErrorVec<Error>),
}

/// Takes ownership of the first element of a non-empty error sequence.
pub(crate) fn first_of(errors: ErrorVec<Error>) -> Error {
    errors
        .into_iter()
        .next()
        .expect("error sequence is empty; this is a bug")
}

impl<T> ErrorOr<T> {
    /// Creates a success container wrapping `value`.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self { state: State::Value(value) }
    }

    /// Creates a failure container holding the single error `error`.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self { state: State::Errors(smallvec![error]) }
    }

    /// Creates a failure container from a sequence of errors, preserving
    /// their order.
    ///
    /// # Panics
    ///
    /// Panics if `errors` yields no elements. An empty error sequence is a
    /// programmer error and is rejected at construction rather than becoming
    /// an empty success or a synthesized error. The
    /// [`errors!`](crate::errors) macro rules this out syntactically.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let outcome: ErrorOr<()> = ErrorOr::from_errors([Error::validation(), Error::conflict()]);
    /// assert_eq!(outcome.errors().len(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use error_or::{Error, ErrorOr};
    ///
    /// let _: ErrorOr<()> = ErrorOr::from_errors(Vec::<Error>::new());
    /// ```
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: ErrorVec<Error> = errors.into_iter().collect();
        assert!(
            !errors.is_empty(),
            "ErrorOr::from_errors requires at least one error"
        );
        Self { state: State::Errors(errors) }
    }

    /// Wraps an already-validated non-empty sequence without re-collecting.
    #[inline]
    pub(crate) fn from_error_vec(errors: ErrorVec<Error>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { state: State::Errors(errors) }
    }

    /// Returns `true` iff the failure variant is populated.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.state, State::Errors(_))
    }

    /// Borrows the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics if the container holds errors. Check
    /// [`is_error`](ErrorOr::is_error) first or use
    /// [`try_value`](ErrorOr::try_value).
    #[must_use]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Value(value) => value,
            State::Errors(_) => {
                panic!("ErrorOr::value called on a failure container")
            },
        }
    }

    /// Borrows the first error of the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the container holds a value. Check
    /// [`is_error`](ErrorOr::is_error) first or use
    /// [`try_first_error`](ErrorOr::try_first_error).
    #[must_use]
    pub fn first_error(&self) -> &Error {
        match &self.state {
            State::Errors(errors) => &errors[0],
            State::Value(_) => {
                panic!("ErrorOr::first_error called on a success container")
            },
        }
    }

    /// Borrows the error sequence.
    ///
    /// Returns the full sequence in construction order on failure and the
    /// empty slice on success; never panics.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        match &self.state {
            State::Value(_) => &[],
            State::Errors(errors) => errors,
        }
    }

    /// Borrows the wrapped value, or `None` on failure.
    #[must_use]
    #[inline]
    pub fn try_value(&self) -> Option<&T> {
        match &self.state {
            State::Value(value) => Some(value),
            State::Errors(_) => None,
        }
    }

    /// Borrows the first error, or `None` on success.
    #[must_use]
    #[inline]
    pub fn try_first_error(&self) -> Option<&Error> {
        match &self.state {
            State::Value(_) => None,
            State::Errors(errors) => Some(&errors[0]),
        }
    }

    /// Extracts the value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self.state {
            State::Value(value) => Some(value),
            State::Errors(_) => None,
        }
    }

    /// Extracts the error sequence, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<Error>> {
        match self.state {
            State::Value(_) => None,
            State::Errors(errors) => Some(errors),
        }
    }

    /// Converts into a plain `Result`, the error side carrying the full
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let outcome = ErrorOr::from_value(7);
    /// assert_eq!(outcome.into_result().ok(), Some(7));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorVec<Error>> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Errors(errors) => Err(errors),
        }
    }

    /// Wraps a plain `Result`, turning the error side into a singleton
    /// sequence.
    #[inline]
    pub fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T> From<Error> for ErrorOr<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<Vec<Error>> for ErrorOr<T> {
    /// # Panics
    ///
    /// Panics if `errors` is empty; see [`ErrorOr::from_errors`].
    #[inline]
    fn from(errors: Vec<Error>) -> Self {
        Self::from_errors(errors)
    }
}

impl<T> From<ErrorVec<Error>> for ErrorOr<T> {
    /// # Panics
    ///
    /// Panics if `errors` is empty; see [`ErrorOr::from_errors`].
    #[inline]
    fn from(errors: ErrorVec<Error>) -> Self {
        Self::from_errors(errors)
    }
}

impl<T> From<Result<T, Error>> for ErrorOr<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        Self::from_result(result)
    }
}
