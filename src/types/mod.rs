//! Failure types and utilities.
//!
//! This module provides the building blocks a failed
//! [`MlResult`](crate::MlResult) is made of: individual [`MlError`]s, the
//! [`ErrorDetails`] container that groups them, and the untyped detail values
//! stored alongside.
//!
//! # Examples
//!
//! ```
//! use ml_result::{ErrorDetails, MlError};
//!
//! let details = ErrorDetails::new(MlError::new("database connection failed"))
//!     .add_detail("retry_count", 3_u32)
//!     .add_detail("host", "db-primary-01");
//!
//! println!("{}", details);
//! // Output: database connection failed {host="db-primary-01", retry_count=3}
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod detail;
pub mod error_details;
pub mod ml_error;

pub use detail::*;
pub use error_details::*;
pub use ml_error::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element, the common case of a failure
/// with one cause.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
