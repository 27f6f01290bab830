pub mod container;

#[cfg(feature = "async")]
pub mod async_ext;
