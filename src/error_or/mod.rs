//! The `ErrorOr` container: construction, accessors, and the sync
//! combinator algebra.

pub(crate) mod core;

mod combinators;

pub use self::core::ErrorOr;
