pub mod combinator_tests;

#[cfg(feature = "tracing")]
pub mod tracing_tests;
