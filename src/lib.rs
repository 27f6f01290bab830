//! A discriminated-union result type: every [`ErrorOr<T>`] holds either one
//! successful value or an ordered, non-empty sequence of structured [`Error`]s.
//! Expected failures travel as values through a small combinator algebra
//! instead of panicking, and every combinator has an async counterpart.
//!
//! # Examples
//!
//! ## Producing and consuming a container
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! fn divide(a: i32, b: i32) -> ErrorOr<i32> {
//!     if b == 0 {
//!         return Error::validation()
//!             .with_code("Math.DivideByZero")
//!             .with_description("cannot divide by zero")
//!             .into();
//!     }
//!     ErrorOr::from_value(a / b)
//! }
//!
//! let message = divide(10, 2)
//!     .map(|quotient| quotient * 2)
//!     .fold(
//!         |value| format!("result: {value}"),
//!         |errors| format!("failed with {} error(s)", errors.len()),
//!     );
//! assert_eq!(message, "result: 10");
//! ```
//!
//! ## Short-circuiting
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! let outcome: ErrorOr<i32> = Error::not_found().into();
//! let chained = outcome.map(|x| x + 1).and_then(|x| ErrorOr::from_value(x * 2));
//!
//! assert!(chained.is_error());
//! assert_eq!(chained.first_error().code(), "General.NotFound");
//! ```
//!
//! ## Multiple errors, order preserved
//!
//! ```
//! use error_or::{errors, Error, ErrorOr};
//!
//! let outcome: ErrorOr<String> = errors![Error::validation(), Error::conflict()];
//! let codes: Vec<&str> = outcome.errors().iter().map(|e| e.code()).collect();
//! assert_eq!(codes, ["General.Validation", "General.Conflict"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The `ErrorOr` container and its combinator algebra
pub mod error_or;
/// Construction macros for failure containers and metadata
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The structured `Error` model and supporting types
pub mod types;

/// Async combinator counterparts (requires the `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires the `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use error_or::ErrorOr;
pub use types::{Error, ErrorKind, ErrorVec, Metadata, MetadataValue};
