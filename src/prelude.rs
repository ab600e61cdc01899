//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use ml_result::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`ml_error!`], [`ml_fail!`], [`details!`]
//! - **Types**: [`MlResult`], [`MlError`], [`ErrorDetails`], [`DetailsMap`]
//! - **Composers**: [`create_complete_ml_result`] and its fail-fast siblings
//! - **Traits**: [`IntoValid`], [`ResultExt`], [`OptionExt`]
//! - **Keys**: [`VALUE_KEY`], [`EXCEPTION_KEY`]
//!
//! # Examples
//!
//! ```
//! use ml_result::prelude::*;
//!
//! fn parse_age(raw: &str) -> MlResult<u8> {
//!     raw.parse::<u8>().into_ml_result_with("age must be a small number")
//! }
//!
//! let profile = create_complete_ml_result(parse_age("41"), "ada".into_valid());
//! assert_eq!(profile, MlResult::valid((41, "ada")));
//! ```

// Macros
pub use crate::{details, ml_error, ml_fail};

// Core types
pub use crate::result::MlResult;
pub use crate::types::{DetailsMap, ErrorDetails, MlError, EXCEPTION_KEY, VALUE_KEY};

// Composers
pub use crate::compose::{
    create_complete_ml_result, create_complete_ml_result3, create_complete_ml_result_from_value,
    create_complete_ml_result_with_value,
};

// Traits
pub use crate::traits::{IntoValid, OptionExt, ResultExt};
