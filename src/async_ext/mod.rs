//! Async counterparts to the sync combinator algebra.
//!
//! Each combinator gains an `_async` twin whose callback returns a future.
//! Semantics match the sync forms exactly, with two additions: the dispatch
//! decision is made synchronously before any suspension (the skipped
//! branch's future is never even constructed), and chained combinators run
//! as a strictly sequential pipeline with exactly one suspension point per
//! step.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_or::prelude_async::*;
//!
//! async fn lookup(id: u64) -> ErrorOr<User> {
//!     fetch_user(id)
//!         .and_then_async(|user| validate(user))
//!         .await
//! }
//! ```

mod combinators;
mod future_ext;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use future_ext::ErrorOrFutureExt;

#[cfg(feature = "tracing")]
pub use tracing_ext::{ErrorOrFutureTraceExt, ErrorOrTraceExt, TraceFailuresFuture};
