//! Combinators over [`MlResult`], each expressed through
//! [`match_with`](MlResult::match_with).
//!
//! Details only ever accumulate on failures: every "if fail" combinator is
//! the identity on `Valid`, and every "if valid" combinator passes a failure
//! through, re-typed but otherwise unchanged.
use super::MlResult;
use crate::types::alloc_type::String;
use crate::types::detail::{Detail, VALUE_KEY};
use crate::types::{ErrorDetails, MlError};

impl<T> MlResult<T> {
    /// Attaches `details[key] = value` when failed; returns `self` unchanged when valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::{MlError, MlResult};
    ///
    /// let failed = MlResult::<u8>::fail(MlError::new("bad port"))
    ///     .add_error_detail_if_fail("port", 99_999_u32);
    /// let details = failed.secure_fail_errors_details();
    /// assert_eq!(details.detail_ref::<u32>("port"), Some(&99_999));
    ///
    /// let untouched = MlResult::valid(8_u8).add_error_detail_if_fail("port", 0_u32);
    /// assert_eq!(untouched, MlResult::valid(8));
    /// ```
    #[inline]
    pub fn add_error_detail_if_fail<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Detail,
    {
        self.match_with(Self::Valid, |details| Self::Fail(details.with_detail(key, value)))
    }

    /// Attaches `value` under [`VALUE_KEY`] when failed.
    #[inline]
    pub fn add_value_detail_if_fail<V>(self, value: V) -> Self
    where
        V: Detail,
    {
        self.add_error_detail_if_fail(VALUE_KEY, value)
    }

    /// Appends one more error when failed.
    #[inline]
    pub fn add_error_if_fail<E>(self, error: E) -> Self
    where
        E: Into<MlError>,
    {
        self.match_with(Self::Valid, |details| Self::Fail(details.with_error(error)))
    }

    /// Merges `other` into the failure when failed; `self`'s errors come first
    /// and `other`'s details win on key collision.
    #[inline]
    pub fn merge_errors_if_fail(self, other: &ErrorDetails) -> Self {
        self.match_with(Self::Valid, |details| Self::Fail(details.merge(other)))
    }

    /// Maps the valid value; a failure is re-typed and `transform` is never called.
    ///
    /// # Arguments
    ///
    /// * `transform` - Applied to the value when valid
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::MlResult;
    ///
    /// let doubled = MlResult::valid(21).complete_with_data_value_if_valid(|x| x * 2);
    /// assert_eq!(doubled, MlResult::valid(42));
    /// ```
    #[inline]
    pub fn complete_with_data_value_if_valid<R, F>(self, transform: F) -> MlResult<R>
    where
        F: FnOnce(T) -> R,
    {
        self.match_with(|value| MlResult::Valid(transform(value)), |details| {
            details.into_result_fail()
        })
    }

    /// Attaches `value` under [`VALUE_KEY`] when failed; the result stays failed.
    #[inline]
    pub fn complete_with_details_value_if_fail<V>(self, value: V) -> Self
    where
        V: Detail,
    {
        self.match_with(Self::Valid, |details| Self::Fail(details.with_detail(VALUE_KEY, value)))
    }

    /// Maps the valid value, or records `value` under [`VALUE_KEY`] before
    /// re-typing the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::{MlError, MlResult};
    ///
    /// let failed = MlResult::<i32>::fail(MlError::new("parse"))
    ///     .complete_with_data_value("raw-input", |x| x.to_string());
    /// let details = failed.secure_fail_errors_details();
    /// assert_eq!(details.get_detail_value::<&str>().secure_valid_value(), "raw-input");
    /// ```
    #[inline]
    pub fn complete_with_data_value<V, R, F>(self, value: V, transform: F) -> MlResult<R>
    where
        V: Detail,
        F: FnOnce(T) -> R,
    {
        self.match_with(|data| MlResult::Valid(transform(data)), |details| {
            details.with_detail(VALUE_KEY, value).into_result_fail()
        })
    }

    /// Chains a computation that may itself fail.
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> MlResult<R>
    where
        F: FnOnce(T) -> MlResult<R>,
    {
        self.match_with(f, ErrorDetails::into_result_fail)
    }

    /// Recovers from a failure; a valid value passes through.
    #[inline]
    pub fn or_else<F>(self, recovery: F) -> Self
    where
        F: FnOnce(ErrorDetails) -> Self,
    {
        self.match_with(Self::Valid, recovery)
    }
}
