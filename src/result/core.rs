use crate::types::alloc_type::String;
use crate::types::detail::{Detail, DetailsMap};
use crate::types::{ErrorDetails, MlError};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

/// A computation that either produced a value or failed with structured details.
///
/// `MlResult<T>` is a tagged union: exactly one of `Valid(T)` or
/// `Fail(ErrorDetails)` is populated, so the two states can never be mixed
/// or left empty. A failure always carries at least one [`MlError`] plus an
/// open-ended bag of diagnostic details.
///
/// The default instance is `Valid(T::default())`. It is a legal success, not
/// an error, so `Valid` does not imply the payload is meaningful.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Valid(T)` - Contains a successful value
/// * `Fail(ErrorDetails)` - Contains one or more errors and their details
///
/// # Examples
///
/// ```
/// use ml_result::{MlError, MlResult};
///
/// let valid = MlResult::valid(42);
/// assert!(valid.is_valid());
///
/// let fail = MlResult::<i32>::fail(MlError::new("bad input"));
/// assert!(fail.is_fail());
/// ```
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MlResult<T> {
    Valid(T),
    Fail(ErrorDetails),
}

impl<T> MlResult<T> {
    /// Creates a valid value.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::MlResult;
    ///
    /// let r = MlResult::valid("ok");
    /// assert_eq!(r.secure_valid_value(), "ok");
    /// ```
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates a failure from anything that normalizes to an [`ErrorDetails`].
    ///
    /// Accepts a single [`MlError`], a non-empty array of errors, an
    /// `(MlError, DetailsMap)` pair, or an existing container.
    ///
    /// # Arguments
    ///
    /// * `details` - The failure description
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::{ErrorDetails, MlError, MlResult};
    ///
    /// let one = MlResult::<()>::fail(MlError::new("missing"));
    /// let many = MlResult::<()>::fail([MlError::new("a"), MlError::new("b")]);
    /// let container = MlResult::<()>::fail(ErrorDetails::new(MlError::new("c")));
    ///
    /// assert_eq!(many.secure_fail_errors_details().len(), 2);
    /// assert!(one.is_fail() && container.is_fail());
    /// ```
    #[inline]
    pub fn fail<D>(details: D) -> Self
    where
        D: Into<ErrorDetails>,
    {
        Self::Fail(details.into())
    }

    /// Creates a failure holding a single error.
    #[inline]
    pub fn fail_with_error(error: MlError) -> Self {
        Self::Fail(ErrorDetails::new(error))
    }

    /// Creates a failure from a first error followed by any number of others.
    #[inline]
    pub fn fail_with_errors<I>(first: MlError, rest: I) -> Self
    where
        I: IntoIterator<Item = MlError>,
    {
        Self::Fail(ErrorDetails::from_errors(first, rest))
    }

    /// Creates a failure with one error and one initial detail entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::{MlError, MlResult};
    ///
    /// let r = MlResult::<()>::fail_with_detail(MlError::new("timeout"), "elapsed_ms", 1500_u64);
    /// let details = r.secure_fail_errors_details();
    /// assert_eq!(details.detail_ref::<u64>("elapsed_ms"), Some(&1500));
    /// ```
    #[inline]
    pub fn fail_with_detail<K, V>(error: MlError, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Detail,
    {
        Self::Fail(ErrorDetails::new(error).with_detail(key, value))
    }

    /// Creates a failure with one error and an initial details bag.
    #[inline]
    pub fn fail_with_details(error: MlError, details: DetailsMap) -> Self {
        Self::Fail(ErrorDetails::new(error).with_details(details))
    }

    /// Returns `true` if the result holds a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.match_ref(|_| true, |_| false)
    }

    /// Returns `true` if the result holds a failure.
    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_valid()
    }

    /// Exhaustive dispatch: runs exactly one of the two branches.
    ///
    /// Every other operation on `MlResult` is expressed through this method.
    /// The return type is free, so `match_with` serves both as a transformer
    /// and as a side-effecting visitor.
    ///
    /// # Arguments
    ///
    /// * `on_valid` - Called with the value when valid
    /// * `on_fail` - Called with the failure container when failed
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::{MlError, MlResult};
    ///
    /// let describe = |r: MlResult<i32>| {
    ///     r.match_with(|v| format!("got {v}"), |d| format!("failed: {d}"))
    /// };
    ///
    /// assert_eq!(describe(MlResult::valid(3)), "got 3");
    /// assert_eq!(describe(MlResult::fail(MlError::new("boom"))), "failed: boom");
    /// ```
    #[inline]
    pub fn match_with<R, V, F>(self, on_valid: V, on_fail: F) -> R
    where
        V: FnOnce(T) -> R,
        F: FnOnce(ErrorDetails) -> R,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Fail(details) => on_fail(details),
        }
    }

    /// Borrowing form of [`match_with`](Self::match_with).
    #[inline]
    pub fn match_ref<'a, R, V, F>(&'a self, on_valid: V, on_fail: F) -> R
    where
        V: FnOnce(&'a T) -> R,
        F: FnOnce(&'a ErrorDetails) -> R,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Fail(details) => on_fail(details),
        }
    }

    /// Returns the value, treating a failure as a fatal programming error.
    ///
    /// Use only where earlier validation has already established that this
    /// result cannot fail.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Fail`; the message includes the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::MlResult;
    ///
    /// assert_eq!(MlResult::valid(7).secure_valid_value(), 7);
    /// ```
    #[track_caller]
    pub fn secure_valid_value(self) -> T {
        self.expect_valid("secure_valid_value called on a failed result")
    }

    /// Like [`secure_valid_value`](Self::secure_valid_value) with a caller-supplied message.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the result is `Fail`.
    #[track_caller]
    pub fn expect_valid(self, message: &str) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Fail(details) => fatal(message, Some(&details)),
        }
    }

    /// Returns the failure container, treating a value as a fatal programming error.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Valid`.
    #[track_caller]
    pub fn secure_fail_errors_details(self) -> ErrorDetails {
        self.expect_fail("secure_fail_errors_details called on a valid result")
    }

    /// Like [`secure_fail_errors_details`](Self::secure_fail_errors_details)
    /// with a caller-supplied message.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the result is `Valid`.
    #[track_caller]
    pub fn expect_fail(self, message: &str) -> ErrorDetails {
        match self {
            Self::Valid(_) => fatal(message, None),
            Self::Fail(details) => details,
        }
    }

    /// Borrows the value, if valid.
    #[must_use]
    #[inline]
    pub fn valid_ref(&self) -> Option<&T> {
        self.match_ref(Some, |_| None)
    }

    /// Borrows the failure container, if failed.
    #[must_use]
    #[inline]
    pub fn fail_ref(&self) -> Option<&ErrorDetails> {
        self.match_ref(|_| None, Some)
    }

    /// Converts into `Option<T>`, discarding any failure.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.match_with(Some, |_| None)
    }

    /// Converts into `Option<ErrorDetails>`, discarding any value.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<ErrorDetails> {
        self.match_with(|_| None, Some)
    }

    /// Converts into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ml_result::MlResult;
    ///
    /// assert_eq!(MlResult::valid(1).into_result().ok(), Some(1));
    /// ```
    #[inline]
    #[allow(clippy::result_large_err)]
    pub fn into_result(self) -> Result<T, ErrorDetails> {
        self.match_with(Ok, Err)
    }
}

#[cold]
#[track_caller]
fn fatal(message: &str, details: Option<&ErrorDetails>) -> ! {
    #[cfg(feature = "tracing")]
    crate::tracing_ext::log_fatal(message, details);

    match details {
        Some(details) => panic!("{}: {}", message, details),
        None => panic!("{}", message),
    }
}

impl<T: Default> Default for MlResult<T> {
    /// The "discard" instance: `Valid(T::default())`.
    #[inline]
    fn default() -> Self {
        Self::Valid(T::default())
    }
}

impl<T: Display> Display for MlResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.match_ref(|value| value as &dyn Display, |details| details as &dyn Display);
        Display::fmt(shown, f)
    }
}
