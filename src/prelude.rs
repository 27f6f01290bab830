//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_or::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use error_or::prelude::*;
//!
//! fn parse_age(input: &str) -> ErrorOr<u8> {
//!     match input.parse() {
//!         Ok(age) => ErrorOr::from_value(age),
//!         Err(_) => Error::validation()
//!             .with_code("Age.Invalid")
//!             .with_description("age must be a number")
//!             .into(),
//!     }
//! }
//!
//! assert!(parse_age("abc").is_error());
//! ```

// Macros
pub use crate::{errors, metadata};

// Core types
pub use crate::error_or::ErrorOr;
pub use crate::types::{Error, ErrorKind, ErrorVec, Metadata, MetadataValue};
