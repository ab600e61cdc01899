use crate::result::MlResult;

/// Lifts any value into a `Valid` result.
///
/// This is the value-side counterpart of the `From` conversions that turn
/// errors and containers into failures. It is blanket-implemented, so every
/// type gains `.into_valid()`.
///
/// # Examples
///
/// ```
/// use ml_result::traits::IntoValid;
/// use ml_result::MlResult;
///
/// let r: MlResult<u32> = 42_u32.into_valid();
/// assert_eq!(r, MlResult::valid(42));
/// ```
pub trait IntoValid: Sized {
    /// Wraps `self` as `MlResult::Valid(self)`.
    #[inline]
    fn into_valid(self) -> MlResult<Self> {
        MlResult::Valid(self)
    }
}

impl<T> IntoValid for T {}
