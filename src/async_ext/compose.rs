//! Deferred forms of the product combinators.
//!
//! Every operand is an `IntoFuture<Output = MlResult<_>>`. Because
//! [`MlResult`] itself implements `IntoFuture` as an already-resolved value,
//! a single function covers every pairing of immediate and deferred
//! operands. Operands are awaited one after another in declared order, and
//! only then is the synchronous combinator applied.

use core::future::IntoFuture;

use crate::compose;
use crate::result::MlResult;

/// Deferred [`create_complete_ml_result`](crate::compose::create_complete_ml_result)
/// (merge policy).
///
/// # Examples
///
/// ```rust
/// use ml_result::async_ext::create_complete_ml_result_async;
/// use ml_result::MlResult;
///
/// async fn example() {
///     let pair = create_complete_ml_result_async(
///         async { MlResult::valid(1) },
///         MlResult::valid("a"),
///     )
///     .await;
///     assert_eq!(pair, MlResult::valid((1, "a")));
/// }
/// ```
pub async fn create_complete_ml_result_async<S1, S2, T1, T2>(
    source1: S1,
    source2: S2,
) -> MlResult<(T1, T2)>
where
    S1: IntoFuture<Output = MlResult<T1>>,
    S2: IntoFuture<Output = MlResult<T2>>,
{
    let first = source1.await;
    let second = source2.await;
    compose::create_complete_ml_result(first, second)
}

/// Deferred [`create_complete_ml_result3`](crate::compose::create_complete_ml_result3)
/// (fail-fast policy).
///
/// All three operands are awaited before the first failure is selected.
pub async fn create_complete_ml_result3_async<S1, S2, S3, T1, T2, T3>(
    source1: S1,
    source2: S2,
    source3: S3,
) -> MlResult<(T1, T2, T3)>
where
    S1: IntoFuture<Output = MlResult<T1>>,
    S2: IntoFuture<Output = MlResult<T2>>,
    S3: IntoFuture<Output = MlResult<T3>>,
{
    let first = source1.await;
    let second = source2.await;
    let third = source3.await;
    compose::create_complete_ml_result3(first, second, third)
}

/// Deferred [`create_complete_ml_result_from_value`](crate::compose::create_complete_ml_result_from_value).
pub async fn create_complete_ml_result_from_value_async<S2, T1, T2>(
    value: T1,
    source: S2,
) -> MlResult<(T1, T2)>
where
    S2: IntoFuture<Output = MlResult<T2>>,
{
    compose::create_complete_ml_result_from_value(value, source.await)
}

/// Deferred [`create_complete_ml_result_with_value`](crate::compose::create_complete_ml_result_with_value).
pub async fn create_complete_ml_result_with_value_async<S1, T1, T2>(
    source: S1,
    value: T2,
) -> MlResult<(T1, T2)>
where
    S1: IntoFuture<Output = MlResult<T1>>,
{
    compose::create_complete_ml_result_with_value(source.await, value)
}
