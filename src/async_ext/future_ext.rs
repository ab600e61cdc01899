//! Extension trait for `Future<Output = MlResult<T>>`.
//!
//! Provides the deferred counterparts of the [`MlResult`] combinators. Each
//! one is the synchronous combinator run inside a [`MatchFuture`], so branch
//! semantics are identical and the non-selected branch never runs.

use core::future::{ready, Future};

use crate::result::MlResult;
use crate::types::alloc_type::String;
use crate::types::detail::{Detail, VALUE_KEY};
use crate::types::ErrorDetails;

use super::match_future::MatchFuture;

/// Extension trait for futures resolving to an [`MlResult`].
///
/// # Examples
///
/// ```rust
/// use ml_result::prelude_async::*;
///
/// async fn load(id: u32) -> MlResult<String> {
///     MlResult::fail(MlError::new("not found"))
/// }
///
/// async fn example() {
///     let result = load(7)
///         .add_error_detail_if_fail("id", 7_u32)
///         .complete_with_data_value_if_valid(|s| s.len())
///         .await;
///     assert!(result.is_fail());
/// }
/// ```
pub trait FutureMlResultExt<T>: Future<Output = MlResult<T>> + Sized {
    /// Awaits the result, then runs exactly one branch and awaits its future.
    ///
    /// # Arguments
    ///
    /// * `on_valid` - Produces the future to await when valid
    /// * `on_fail` - Produces the future to await when failed
    fn match_async<OnValid, OnFail, ValidFut, FailFut>(
        self,
        on_valid: OnValid,
        on_fail: OnFail,
    ) -> MatchFuture<Self, OnValid, OnFail, ValidFut, FailFut>
    where
        OnValid: FnOnce(T) -> ValidFut,
        OnFail: FnOnce(ErrorDetails) -> FailFut,
    {
        MatchFuture::new(self, on_valid, on_fail)
    }

    /// Runs a synchronous transformation on whichever branch is selected.
    ///
    /// The building block for every other method on this trait.
    fn match_then<R, OnValid, OnFail>(
        self,
        on_valid: OnValid,
        on_fail: OnFail,
    ) -> impl Future<Output = R>
    where
        OnValid: FnOnce(T) -> R,
        OnFail: FnOnce(ErrorDetails) -> R,
    {
        self.match_async(move |value| ready(on_valid(value)), move |details| ready(on_fail(details)))
    }

    /// Deferred [`MlResult::add_error_detail_if_fail`].
    fn add_error_detail_if_fail<K, V>(self, key: K, value: V) -> impl Future<Output = MlResult<T>>
    where
        K: Into<String>,
        V: Detail,
    {
        self.match_then(MlResult::Valid, move |details| {
            MlResult::Fail(details.with_detail(key, value))
        })
    }

    /// Deferred [`MlResult::add_value_detail_if_fail`].
    fn add_value_detail_if_fail<V>(self, value: V) -> impl Future<Output = MlResult<T>>
    where
        V: Detail,
    {
        self.add_error_detail_if_fail(VALUE_KEY, value)
    }

    /// Deferred [`MlResult::complete_with_data_value_if_valid`].
    fn complete_with_data_value_if_valid<R, F>(
        self,
        transform: F,
    ) -> impl Future<Output = MlResult<R>>
    where
        F: FnOnce(T) -> R,
    {
        self.match_then(
            move |value| MlResult::Valid(transform(value)),
            ErrorDetails::into_result_fail::<R>,
        )
    }

    /// Deferred [`MlResult::complete_with_details_value_if_fail`].
    fn complete_with_details_value_if_fail<V>(self, value: V) -> impl Future<Output = MlResult<T>>
    where
        V: Detail,
    {
        self.add_error_detail_if_fail(VALUE_KEY, value)
    }

    /// Deferred [`MlResult::complete_with_data_value`].
    fn complete_with_data_value<V, R, F>(
        self,
        value: V,
        transform: F,
    ) -> impl Future<Output = MlResult<R>>
    where
        V: Detail,
        F: FnOnce(T) -> R,
    {
        self.match_then(move |data| MlResult::Valid(transform(data)), move |details| {
            details.with_detail(VALUE_KEY, value).into_result_fail()
        })
    }

    /// Chains a deferred computation that may itself fail.
    ///
    /// `f` is only called, and its future only created, when the source is valid.
    fn and_then_async<R, F, Next>(self, f: F) -> impl Future<Output = MlResult<R>>
    where
        F: FnOnce(T) -> Next,
        Next: Future<Output = MlResult<R>>,
    {
        self.match_async(f, |details: ErrorDetails| ready(details.into_result_fail::<R>()))
    }
}

impl<Fut, T> FutureMlResultExt<T> for Fut where Fut: Future<Output = MlResult<T>> {}
