//! Conversion traits for lifting plain values, `Result`s and `Option`s into
//! [`MlResult`](crate::MlResult).
//!
//! - [`IntoValid`]: lifts any value into `Valid`
//! - [`ResultExt`]: converts `Result<T, E>` with or without a custom message
//! - [`OptionExt`]: converts `Option<T>`, failing on `None`
//!
//! # Examples
//!
//! ```
//! use ml_result::traits::{IntoValid, OptionExt};
//!
//! assert!("ready".into_valid().is_valid());
//! assert!(None::<i32>.valid_or_fail("absent").is_fail());
//! ```

pub mod into_valid;
pub mod result_ext;

pub use into_valid::IntoValid;
pub use result_ext::{OptionExt, ResultExt};
