//! Conversion helpers between `MlResult`, its failure parts, and `core::result::Result`.
//!
//! These adapters make it straightforward to adopt `ml-result` incrementally:
//! legacy `Result`s convert in (capturing the error as a payload and its
//! description under [`EXCEPTION_KEY`]), and `MlResult`s convert back out
//! when talking to APIs that expect a standard `Result`.
//!
//! Values themselves lift through [`IntoValid`](crate::traits::IntoValid)
//! rather than `From`, since a blanket `From<T>` would collide with the
//! error conversions below.
//!
//! # Examples
//!
//! ```
//! use ml_result::{ErrorDetails, MlError, MlResult, EXCEPTION_KEY};
//!
//! let from_error: MlResult<i32> = MlError::new("bad input").into();
//! assert!(from_error.is_fail());
//!
//! let parsed: MlResult<i32> = "x".parse::<i32>().into();
//! let details = parsed.secure_fail_errors_details();
//! assert!(details.contains_detail(EXCEPTION_KEY));
//!
//! let back: Result<i32, ErrorDetails> = MlResult::valid(3).into();
//! assert_eq!(back.ok(), Some(3));
//! ```
use crate::result::MlResult;
use crate::types::detail::{DetailsMap, EXCEPTION_KEY};
use crate::types::{ErrorDetails, MlError};
use alloc::string::ToString;

impl<T> From<MlError> for MlResult<T> {
    #[inline]
    fn from(error: MlError) -> Self {
        Self::Fail(ErrorDetails::new(error))
    }
}

impl<T, const N: usize> From<[MlError; N]> for MlResult<T> {
    #[inline]
    fn from(errors: [MlError; N]) -> Self {
        Self::Fail(ErrorDetails::from_array(errors))
    }
}

impl<T> From<ErrorDetails> for MlResult<T> {
    #[inline]
    fn from(details: ErrorDetails) -> Self {
        Self::Fail(details)
    }
}

impl<T> From<(MlError, DetailsMap)> for MlResult<T> {
    #[inline]
    fn from(parts: (MlError, DetailsMap)) -> Self {
        Self::Fail(parts.into())
    }
}

/// Captures `Err(e)` as a failure whose error carries `e` as payload and
/// whose details record `e`'s description under [`EXCEPTION_KEY`].
impl<T, E> From<Result<T, E>> for MlResult<T>
where
    E: core::error::Error + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Fail(capture_error(error)),
        }
    }
}

impl<T> From<MlResult<T>> for Result<T, ErrorDetails> {
    #[inline]
    fn from(result: MlResult<T>) -> Self {
        result.into_result()
    }
}

/// Builds a failure container around a captured error.
///
/// # Examples
///
/// ```
/// use ml_result::convert::capture_error;
/// use ml_result::EXCEPTION_KEY;
///
/// let io = std::io::Error::other("disk full");
/// let details = capture_error(io);
///
/// assert_eq!(details.first_error().to_string(), "disk full");
/// assert_eq!(details.detail_ref::<String>(EXCEPTION_KEY).map(String::as_str), Some("disk full"));
/// assert!(details.first_error().downcast_ref::<std::io::Error>().is_some());
/// ```
pub fn capture_error<E>(error: E) -> ErrorDetails
where
    E: core::error::Error + Send + Sync + 'static,
{
    let description = error.to_string();
    ErrorDetails::new(MlError::from_source(error)).with_detail(EXCEPTION_KEY, description)
}

/// Converts a `Result` into an `MlResult`; see the `From` impl.
#[inline]
pub fn result_to_ml_result<T, E>(result: Result<T, E>) -> MlResult<T>
where
    E: core::error::Error + Send + Sync + 'static,
{
    result.into()
}

/// Converts an `MlResult` into a `Result`, keeping the whole failure container.
#[inline]
#[allow(clippy::result_large_err)]
pub fn ml_result_to_result<T>(result: MlResult<T>) -> Result<T, ErrorDetails> {
    result.into_result()
}

/// Converts an `MlResult` into a `Result` carrying only the first error.
///
/// # Examples
///
/// ```
/// use ml_result::convert::ml_result_to_first_error;
/// use ml_result::{MlError, MlResult};
///
/// let r = MlResult::<()>::fail([MlError::new("a"), MlError::new("b")]);
/// assert_eq!(ml_result_to_first_error(r), Err(MlError::new("a")));
/// ```
#[inline]
pub fn ml_result_to_first_error<T>(result: MlResult<T>) -> Result<T, MlError> {
    result.match_with(Ok, |details| Err(details.first_error().clone()))
}
