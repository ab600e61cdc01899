pub mod traits;
pub mod types;

#[cfg(feature = "async")]
pub mod async_ext;

#[cfg(feature = "tracing")]
pub mod tracing_ext;
