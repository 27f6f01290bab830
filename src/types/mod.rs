//! The structured error model.
//!
//! This module provides the immutable [`Error`] value, its categorical
//! [`ErrorKind`] tag, and the ordered [`Metadata`] mapping errors may carry.
//!
//! # Examples
//!
//! ```
//! use error_or::{metadata, Error, ErrorKind};
//!
//! let err = Error::conflict()
//!     .with_code("User.DuplicateEmail")
//!     .with_description("a user with this email already exists")
//!     .with_metadata(metadata! { "email" => "amichai@example.com" });
//!
//! assert_eq!(err.kind(), ErrorKind::Conflict);
//! assert_eq!(err.code(), "User.DuplicateEmail");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;

pub use error::{Error, ErrorKind, Metadata, MetadataValue};

/// SmallVec-backed collection used for error sequences.
///
/// Uses inline storage for one element so the common single-error failure
/// never touches the heap.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
