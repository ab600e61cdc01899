//! Failure container: one or more errors plus a details bag.
//!
//! [`ErrorDetails`] is what a failed [`MlResult`] carries. It behaves as an
//! immutable value: every operation that "adds" something returns a new
//! container and leaves the receiver untouched.
//!
//! # Examples
//!
//! ```
//! use ml_result::{ErrorDetails, MlError};
//!
//! let details = ErrorDetails::new(MlError::new("bad input"))
//!     .add_detail("field", "email")
//!     .add_error("retry budget exhausted");
//!
//! assert_eq!(details.len(), 2);
//! assert_eq!(details.get_detail::<&str>("field").secure_valid_value(), "email");
//! ```
use crate::result::MlResult;
use crate::types::alloc_type::{Arc, String, Vec};
use crate::types::detail::{
    detail_type_name, detail_value, downcast_detail, Detail, DetailLookupError, DetailValue,
    DetailsMap, VALUE_KEY,
};
use crate::types::{ErrorVec, MlError};
use core::any::Any;
use core::fmt::{self, Display};
use smallvec::smallvec;

/// Ordered, non-empty list of [`MlError`]s plus a string-keyed details bag.
///
/// The non-empty invariant is upheld by the constructors: every way of
/// building a container takes at least one error, and the only fallible
/// path ([`TryFrom<Vec<MlError>>`](#impl-TryFrom%3CVec%3CMlError%3E%3E-for-ErrorDetails))
/// reports [`EmptyErrors`] instead of producing an empty container.
#[must_use]
#[derive(Clone, Debug)]
pub struct ErrorDetails {
    errors: ErrorVec<MlError>,
    details: DetailsMap,
}

impl ErrorDetails {
    /// Creates a container holding a single error and no details.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Into<MlError>,
    {
        Self { errors: smallvec![error.into()], details: DetailsMap::new() }
    }

    /// Creates a container from a first error followed by any number of others.
    pub fn from_errors<I>(first: MlError, rest: I) -> Self
    where
        I: IntoIterator<Item = MlError>,
    {
        let mut errors: ErrorVec<MlError> = smallvec![first];
        errors.extend(rest);
        Self { errors, details: DetailsMap::new() }
    }

    /// Creates a container from a fixed-size array of errors.
    ///
    /// An empty array is rejected when the call is compiled: `N == 0` fails
    /// a const assertion during monomorphization.
    pub fn from_array<const N: usize>(errors: [MlError; N]) -> Self {
        const { assert!(N > 0, "ErrorDetails requires at least one error") };
        Self { errors: errors.into_iter().collect(), details: DetailsMap::new() }
    }

    /// Replaces the details bag wholesale.
    #[inline]
    pub fn with_details(mut self, details: DetailsMap) -> Self {
        self.details = details;
        self
    }

    /// Returns a new container with `error` appended.
    pub fn add_error<E>(&self, error: E) -> Self
    where
        E: Into<MlError>,
    {
        self.clone().with_error(error)
    }

    /// Consuming variant of [`add_error`](Self::add_error).
    #[inline]
    pub fn with_error<E>(mut self, error: E) -> Self
    where
        E: Into<MlError>,
    {
        self.errors.push(error.into());
        self
    }

    /// Consuming variant of [`add_detail`](Self::add_detail).
    #[inline]
    pub fn with_detail<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Detail,
    {
        self.details.insert(key.into(), detail_value(value));
        self
    }

    /// Returns a new container with `details[key] = value`, overwriting any
    /// previous entry under `key`.
    pub fn add_detail<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Detail,
    {
        self.add_detail_shared(key, detail_value(value))
    }

    /// Like [`add_detail`](Self::add_detail) for a value that is already shared.
    pub fn add_detail_shared<K>(&self, key: K, value: DetailValue) -> Self
    where
        K: Into<String>,
    {
        let mut next = self.clone();
        next.details.insert(key.into(), value);
        next
    }

    /// Stores `value` under [`VALUE_KEY`].
    #[inline]
    pub fn add_detail_value<V>(&self, value: V) -> Self
    where
        V: Detail,
    {
        self.add_detail(VALUE_KEY, value)
    }

    /// Combines two containers.
    ///
    /// Errors are `self`'s followed by `other`'s, in order. Details are the
    /// union of both bags; on a key collision `other`'s entry wins.
    ///
    /// ```
    /// use ml_result::{ErrorDetails, MlError};
    ///
    /// let left = ErrorDetails::new(MlError::new("a")).add_detail("k", 1);
    /// let right = ErrorDetails::new(MlError::new("b")).add_detail("k", 2);
    /// let merged = left.merge(&right);
    ///
    /// assert_eq!(merged.errors()[0].to_string(), "a");
    /// assert_eq!(merged.errors()[1].to_string(), "b");
    /// assert_eq!(merged.detail_ref::<i32>("k"), Some(&2));
    /// ```
    pub fn merge(&self, other: &ErrorDetails) -> Self {
        let mut next = self.clone();
        next.errors.extend(other.errors.iter().cloned());
        for (key, value) in &other.details {
            next.details.insert(key.clone(), value.clone());
        }
        next
    }

    /// Owned variant of [`merge`](Self::merge) that reuses both allocations.
    pub(crate) fn merge_owned(mut self, other: ErrorDetails) -> Self {
        self.errors.extend(other.errors);
        self.details.extend(other.details);
        self
    }

    /// Looks up a detail of type `V`.
    ///
    /// Returns `Valid` with a clone of the stored value when `key` exists and
    /// holds a `V`. Otherwise returns a `Fail` built from this container with
    /// one more error appended describing the missing key or type mismatch;
    /// `self` is not modified.
    pub fn get_detail<V>(&self, key: &str) -> MlResult<V>
    where
        V: Any + Clone,
    {
        match self.details.get(key) {
            Some(value) => match downcast_detail::<V>(value) {
                Some(found) => MlResult::Valid(found.clone()),
                None => self.lookup_failed(DetailLookupError::TypeMismatch {
                    key: key.into(),
                    expected: core::any::type_name::<V>(),
                    found: detail_type_name(value),
                }),
            },
            None => self.lookup_failed(DetailLookupError::Missing { key: key.into() }),
        }
    }

    /// [`get_detail`](Self::get_detail) under [`VALUE_KEY`].
    #[inline]
    pub fn get_detail_value<V>(&self) -> MlResult<V>
    where
        V: Any + Clone,
    {
        self.get_detail(VALUE_KEY)
    }

    fn lookup_failed<V>(&self, reason: DetailLookupError) -> MlResult<V> {
        MlResult::Fail(self.add_error(MlError::from_source(reason)))
    }

    /// Borrows a detail of type `V` without building a failure on mismatch.
    #[must_use]
    pub fn detail_ref<V>(&self, key: &str) -> Option<&V>
    where
        V: Any,
    {
        self.details.get(key).and_then(downcast_detail::<V>)
    }

    /// Returns `true` if a detail exists under `key`, whatever its type.
    #[must_use]
    #[inline]
    pub fn contains_detail(&self, key: &str) -> bool {
        self.details.contains_key(key)
    }

    /// Re-types this failure as a `Fail` of any result type.
    #[inline]
    pub fn to_result_fail<V>(&self) -> MlResult<V> {
        MlResult::Fail(self.clone())
    }

    /// Consuming variant of [`to_result_fail`](Self::to_result_fail).
    #[inline]
    pub fn into_result_fail<V>(self) -> MlResult<V> {
        MlResult::Fail(self)
    }

    /// Returns the errors in insertion order.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[MlError] {
        &self.errors
    }

    /// Returns the first error recorded.
    #[inline]
    pub fn first_error(&self) -> &MlError {
        &self.errors[0]
    }

    /// Returns the details bag.
    #[must_use]
    #[inline]
    pub fn details(&self) -> &DetailsMap {
        &self.details
    }

    /// Number of errors; never zero.
    #[must_use]
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consumes the container, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<MlError>, DetailsMap) {
        (self.errors.into_vec(), self.details)
    }
}

impl Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            Display::fmt(error, f)?;
        }
        if !self.details.is_empty() {
            f.write_str(" {")?;
            for (i, (key, value)) in self.details.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={:?}", key, value)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

/// Two containers are equal when their errors match in order and they hold
/// the same details. Detail values are type-erased, so they are compared by
/// their `Debug` rendering, the same form `Display` and serde emit.
impl PartialEq for ErrorDetails {
    fn eq(&self, other: &Self) -> bool {
        self.errors == other.errors && same_details(&self.details, &other.details)
    }
}

fn same_details(left: &DetailsMap, right: &DetailsMap) -> bool {
    left.len() == right.len()
        && left.iter().zip(right).all(|((left_key, left_value), (right_key, right_value))| {
            left_key == right_key
                && (Arc::ptr_eq(left_value, right_value)
                    || alloc::format!("{:?}", left_value) == alloc::format!("{:?}", right_value))
        })
}

impl Eq for ErrorDetails {}

impl From<MlError> for ErrorDetails {
    #[inline]
    fn from(error: MlError) -> Self {
        Self::new(error)
    }
}

impl<const N: usize> From<[MlError; N]> for ErrorDetails {
    #[inline]
    fn from(errors: [MlError; N]) -> Self {
        Self::from_array(errors)
    }
}

impl From<(MlError, DetailsMap)> for ErrorDetails {
    #[inline]
    fn from((error, details): (MlError, DetailsMap)) -> Self {
        Self::new(error).with_details(details)
    }
}

/// Returned when building an [`ErrorDetails`] from an empty error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyErrors;

impl Display for EmptyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error container needs at least one error")
    }
}

impl core::error::Error for EmptyErrors {}

impl TryFrom<Vec<MlError>> for ErrorDetails {
    type Error = EmptyErrors;

    fn try_from(errors: Vec<MlError>) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            return Err(EmptyErrors);
        }
        Ok(Self { errors: ErrorVec::from_vec(errors), details: DetailsMap::new() })
    }
}

#[cfg(feature = "serde")]
struct DebugDetails<'a>(&'a DetailsMap);

#[cfg(feature = "serde")]
impl serde::Serialize for DebugDetails<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, &alloc::format!("{:?}", value))?;
        }
        map.end()
    }
}

/// Detail values serialize as their `Debug` rendering.
#[cfg(feature = "serde")]
impl serde::Serialize for ErrorDetails {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ErrorDetails", 2)?;
        state.serialize_field("errors", self.errors.as_slice())?;
        state.serialize_field("details", &DebugDetails(&self.details))?;
        state.end()
    }
}
