//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `ml_result::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Failures with Details
//!
//! ```
//! use ml_result::{MlError, MlResult, VALUE_KEY};
//!
//! let result: MlResult<u32> = MlResult::fail(MlError::new("bad input"))
//!     .add_value_detail_if_fail(42_u32)
//!     .add_error_detail_if_fail("field", "quantity");
//!
//! let details = result.secure_fail_errors_details();
//! assert_eq!(details.get_detail_value::<u32>(), MlResult::valid(42));
//! assert!(details.contains_detail(VALUE_KEY));
//! ```
//!
//! ## Dispatch
//!
//! ```
//! use ml_result::MlResult;
//!
//! let shown = MlResult::valid(5).match_with(|v| v * 2, |_| 0);
//! assert_eq!(shown, 10);
//! ```
//!
//! ## Composition
//!
//! ```
//! use ml_result::compose::create_complete_ml_result;
//! use ml_result::{MlError, MlResult};
//!
//! let merged = create_complete_ml_result(
//!     MlResult::<i32>::fail(MlError::new("left")),
//!     MlResult::<&str>::fail(MlError::new("right")),
//! );
//! let errors: Vec<String> = merged
//!     .secure_fail_errors_details()
//!     .errors()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(errors, ["left", "right"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Product combinators with merge and fail-fast policies
pub mod compose;
/// Conversions between MlResult, its failure parts, and core Result
pub mod convert;
/// Construction macros for errors, details and failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The MlResult sum type and its combinators
pub mod result;
/// Conversion traits for lifting values into MlResult
pub mod traits;
/// MlError, ErrorDetails and detail value types
pub mod types;

/// Async extensions: deferred match, combinators and composers (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration - failure events and span details (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[doc(hidden)]
pub use alloc::format as __format;

pub use compose::*;
pub use result::MlResult;
pub use traits::*;
pub use types::{
    DetailValue, DetailsMap, EmptyErrors, ErrorDetails, MlError, EXCEPTION_KEY, SPAN_KEY,
    VALUE_KEY,
};
