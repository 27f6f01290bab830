//! Construction macros for failure containers and metadata.
//!
//! - [`macro@crate::errors`] - Builds a failure [`ErrorOr`](crate::ErrorOr)
//!   from one or more errors. At least one element is required syntactically,
//!   so the empty-sequence programmer error cannot be written at these call
//!   sites.
//! - [`macro@crate::metadata`] - Builds an ordered
//!   [`Metadata`](crate::Metadata) mapping from `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use error_or::{errors, metadata, Error, ErrorOr};
//!
//! let outcome: ErrorOr<()> = errors![
//!     Error::validation().with_code("User.MissingName"),
//!     Error::validation()
//!         .with_code("User.AgeOutOfRange")
//!         .with_metadata(metadata! { "min" => 0, "max" => 150 }),
//! ];
//!
//! assert_eq!(outcome.errors().len(), 2);
//! ```

/// Builds a failure [`ErrorOr`](crate::ErrorOr) from one or more errors.
///
/// Error order in the macro invocation is the order of the resulting
/// sequence. The macro accepts no empty form; use it wherever the error set
/// is written out literally and the non-empty check of
/// [`ErrorOr::from_errors`](crate::ErrorOr::from_errors) should be a
/// compile-time guarantee instead.
///
/// # Examples
///
/// ```
/// use error_or::{errors, Error, ErrorOr};
///
/// let outcome: ErrorOr<i32> = errors![Error::validation(), Error::conflict()];
/// assert!(outcome.is_error());
/// assert_eq!(outcome.first_error().code(), "General.Validation");
/// ```
#[macro_export]
macro_rules! errors {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::ErrorOr::from_errors([$first $(, $rest)*])
    };
}

/// Builds an ordered [`Metadata`](crate::Metadata) mapping.
///
/// Keys are anything convertible into a `String`; values are anything
/// convertible into a [`MetadataValue`](crate::MetadataValue) (string,
/// integer, float, and bool literals all work). Entries keep their written
/// order.
///
/// # Examples
///
/// ```
/// use error_or::metadata;
///
/// let metadata = metadata! {
///     "user_id" => 42,
///     "source" => "import",
///     "dry_run" => false,
/// };
/// assert_eq!(metadata.len(), 3);
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut metadata = $crate::Metadata::new();
        $( metadata.insert($key, $value); )+
        metadata
    }};
}
