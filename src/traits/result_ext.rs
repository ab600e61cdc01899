//! Extension traits for bringing `Result` and `Option` values into `MlResult`.
//!
//! # Examples
//!
//! ```
//! use ml_result::traits::{OptionExt, ResultExt};
//! use ml_result::EXCEPTION_KEY;
//!
//! let port = "80x".parse::<u16>().into_ml_result_with("invalid port");
//! let details = port.secure_fail_errors_details();
//! assert_eq!(details.first_error().to_string(), "invalid port");
//! assert!(details.contains_detail(EXCEPTION_KEY));
//!
//! let missing = None::<u8>.valid_or_fail("no value configured");
//! assert!(missing.is_fail());
//! ```

use crate::result::MlResult;
use crate::types::alloc_type::Cow;
use crate::types::detail::EXCEPTION_KEY;
use crate::types::{ErrorDetails, MlError};
use alloc::string::ToString;
use core::fmt::Display;

/// Extension trait converting `Result` into `MlResult`.
pub trait ResultExt<T, E> {
    /// Converts via the capturing `From` impl: the error becomes the payload
    /// of the failure's only error.
    fn into_ml_result(self) -> MlResult<T>
    where
        E: core::error::Error + Send + Sync + 'static;

    /// Converts with a caller-chosen message; the original error's
    /// description is kept under [`EXCEPTION_KEY`].
    ///
    /// # Arguments
    ///
    /// * `message` - Message for the failure's error
    fn into_ml_result_with<M>(self, message: M) -> MlResult<T>
    where
        M: Into<Cow<'static, str>>,
        E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_ml_result(self) -> MlResult<T>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.into()
    }

    #[inline]
    fn into_ml_result_with<M>(self, message: M) -> MlResult<T>
    where
        M: Into<Cow<'static, str>>,
        E: Display,
    {
        match self {
            Ok(value) => MlResult::Valid(value),
            Err(error) => MlResult::Fail(
                ErrorDetails::new(MlError::new(message)).with_detail(EXCEPTION_KEY, error.to_string()),
            ),
        }
    }
}

/// Extension trait converting `Option` into `MlResult`.
pub trait OptionExt<T> {
    /// `Some(v)` becomes `Valid(v)`; `None` fails with `error`.
    fn valid_or_fail<E>(self, error: E) -> MlResult<T>
    where
        E: Into<MlError>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn valid_or_fail<E>(self, error: E) -> MlResult<T>
    where
        E: Into<MlError>,
    {
        match self {
            Some(value) => MlResult::Valid(value),
            None => MlResult::Fail(ErrorDetails::new(error)),
        }
    }
}
