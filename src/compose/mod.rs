//! Product combinators: combine independent results into a result of a tuple.
//!
//! Two policies exist side by side and are deliberately not interchangeable:
//!
//! - **Merge** ([`create_complete_ml_result`]): when both operands fail, their
//!   containers are merged, first operand's errors first.
//! - **Fail-fast** ([`create_complete_ml_result3`] and the value/result forms):
//!   operands are checked left to right and the first failure is returned
//!   on its own.
//!
//! # Examples
//!
//! ```
//! use ml_result::compose::{create_complete_ml_result, create_complete_ml_result3};
//! use ml_result::{MlError, MlResult};
//!
//! let pair = create_complete_ml_result(MlResult::valid(1), MlResult::valid("a"));
//! assert_eq!(pair, MlResult::valid((1, "a")));
//!
//! let merged = create_complete_ml_result(
//!     MlResult::<i32>::fail(MlError::new("a")),
//!     MlResult::<i32>::fail(MlError::new("b")),
//! );
//! assert_eq!(merged.secure_fail_errors_details().len(), 2);
//!
//! let first_only = create_complete_ml_result3(
//!     MlResult::valid(1),
//!     MlResult::<i32>::fail(MlError::new("b")),
//!     MlResult::<i32>::fail(MlError::new("c")),
//! );
//! assert_eq!(first_only.secure_fail_errors_details().len(), 1);
//! ```
use crate::result::MlResult;
use crate::types::ErrorDetails;

/// Combines two results with the merge policy.
///
/// | `source1` | `source2` | result                                  |
/// |-----------|-----------|-----------------------------------------|
/// | Valid(a)  | Valid(b)  | `Valid((a, b))`                         |
/// | Fail(x)   | Valid(_)  | `Fail(x)`                               |
/// | Valid(_)  | Fail(y)   | `Fail(y)`                               |
/// | Fail(x)   | Fail(y)   | `Fail(x.merge(y))`                      |
pub fn create_complete_ml_result<T1, T2>(
    source1: MlResult<T1>,
    source2: MlResult<T2>,
) -> MlResult<(T1, T2)> {
    match source1.into_result() {
        Ok(first) => source2.complete_with_data_value_if_valid(|second| (first, second)),
        Err(failed) => {
            source2.err().into_iter().fold(failed, ErrorDetails::merge_owned).into_result_fail()
        },
    }
}

/// Combines three results with the fail-fast policy.
///
/// The first failing operand, scanning left to right, becomes the result;
/// later failures are not merged in.
pub fn create_complete_ml_result3<T1, T2, T3>(
    source1: MlResult<T1>,
    source2: MlResult<T2>,
    source3: MlResult<T3>,
) -> MlResult<(T1, T2, T3)> {
    source1.and_then(|first| {
        source2.and_then(|second| {
            source3.complete_with_data_value_if_valid(|third| (first, second, third))
        })
    })
}

/// Pairs a bare value with a result; only the result can fail.
#[inline]
pub fn create_complete_ml_result_from_value<T1, T2>(
    value: T1,
    source: MlResult<T2>,
) -> MlResult<(T1, T2)> {
    source.complete_with_data_value_if_valid(|second| (value, second))
}

/// Pairs a result with a bare value; only the result can fail.
#[inline]
pub fn create_complete_ml_result_with_value<T1, T2>(
    source: MlResult<T1>,
    value: T2,
) -> MlResult<(T1, T2)> {
    source.complete_with_data_value_if_valid(|first| (first, value))
}

impl<T> MlResult<T> {
    /// Method form of [`create_complete_ml_result`].
    #[inline]
    pub fn zip<U>(self, other: MlResult<U>) -> MlResult<(T, U)> {
        create_complete_ml_result(self, other)
    }
}
