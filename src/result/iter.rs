use super::MlResult;
use crate::types::alloc_type::Vec;
use crate::types::{ErrorDetails, MlError};

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> IntoIterator for MlResult<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.ok() }
    }
}

impl<'a, T> IntoIterator for &'a MlResult<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> MlResult<T> {
    /// Iterates over the value, yielding nothing when failed.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.valid_ref() }
    }

    /// Iterates over the errors of a failure, yielding nothing when valid.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, MlError> {
        let errors: &[MlError] = self.match_ref(|_| -> &[MlError] { &[] }, ErrorDetails::errors);
        errors.iter()
    }
}

/// Collects results, merging every failure in encounter order.
///
/// The collection is `Valid` only when every item is; otherwise all failure
/// containers are merged left to right, exactly as
/// [`ErrorDetails::merge`] would.
///
/// # Examples
///
/// ```
/// use ml_result::{MlError, MlResult};
///
/// let items = vec![
///     MlResult::valid(1),
///     MlResult::fail(MlError::new("first")),
///     MlResult::fail(MlError::new("second")),
/// ];
/// let collected: MlResult<Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected.secure_fail_errors_details().len(), 2);
/// ```
impl<T, C> FromIterator<MlResult<T>> for MlResult<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = MlResult<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut failure: Option<ErrorDetails> = None;

        for item in iter {
            let collecting = failure.is_none();
            item.match_with(
                |value| {
                    if collecting {
                        values.push(value);
                    }
                },
                |details| {
                    failure = Some(match failure.take() {
                        Some(acc) => acc.merge_owned(details),
                        None => details,
                    });
                },
            );
        }

        match failure {
            Some(details) => MlResult::Fail(details),
            None => MlResult::Valid(values.into_iter().collect()),
        }
    }
}
