//! Async prelude - the sync prelude plus the future extension traits.
//!
//! ```
//! use error_or::prelude_async::*;
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::ErrorOrFutureExt;

#[cfg(feature = "tracing")]
pub use crate::async_ext::{ErrorOrFutureTraceExt, ErrorOrTraceExt};
