//! Untyped diagnostic values attached to failures.
//!
//! A failure's details bag maps string keys to values of any type. Values are
//! stored behind an [`Arc`] so containers can be cloned cheaply while still
//! behaving as immutable values, and they are recovered with a typed lookup
//! that checks the concrete type at runtime.
//!
//! # Examples
//!
//! ```
//! use ml_result::types::{detail_value, Detail};
//!
//! let value = detail_value(42_i32);
//! assert_eq!((*value).as_any().downcast_ref::<i32>(), Some(&42));
//! assert_eq!((*value).type_name(), "i32");
//! ```
use crate::types::alloc_type::{Arc, BTreeMap, String};
use core::any::Any;
use core::fmt::{self, Debug, Display};

/// Detail key under which combinators stash the value being produced when
/// the failure occurred.
pub const VALUE_KEY: &str = "value";

/// Detail key holding the description of a captured error.
pub const EXCEPTION_KEY: &str = "exception";

/// Detail key holding the name of the tracing span active at the failure site.
pub const SPAN_KEY: &str = "span";

/// A value that can live in a failure's details bag.
///
/// Implemented for every `'static` type that is `Debug + Send + Sync`, so
/// callers never implement it by hand.
pub trait Detail: Any + Debug + Send + Sync {
    /// Returns `self` as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, used in lookup diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T> Detail for T
where
    T: Any + Debug + Send + Sync,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// Shared, immutable detail value.
pub type DetailValue = Arc<dyn Detail>;

/// Details bag keyed by string.
pub type DetailsMap = BTreeMap<String, DetailValue>;

/// Wraps `value` as a [`DetailValue`].
///
/// A value that already is a [`DetailValue`] is shared as-is, so details
/// copied from one container into another keep their concrete type.
///
/// ```
/// use ml_result::types::{detail_value, Detail};
///
/// let original = detail_value(5_i32);
/// let copied = detail_value(original.clone());
/// assert_eq!((*copied).as_any().downcast_ref::<i32>(), Some(&5));
/// ```
#[inline]
pub fn detail_value<V: Detail>(value: V) -> DetailValue {
    match (&value as &dyn Any).downcast_ref::<DetailValue>() {
        Some(shared) => Arc::clone(shared),
        None => Arc::new(value),
    }
}

/// Downcasts a stored detail to `V`.
///
/// Dispatches through `dyn Detail` explicitly: calling `as_any` on the
/// `Arc` itself would resolve to the blanket impl for `Arc<dyn Detail>`.
#[inline]
pub(crate) fn downcast_detail<V: Any>(value: &DetailValue) -> Option<&V> {
    <dyn Detail as Detail>::as_any(&**value).downcast_ref::<V>()
}

#[inline]
pub(crate) fn detail_type_name(value: &DetailValue) -> &'static str {
    <dyn Detail as Detail>::type_name(&**value)
}

/// Why a typed detail lookup failed.
///
/// Appended as the payload of a new error by
/// [`ErrorDetails::get_detail`](crate::types::ErrorDetails::get_detail).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLookupError {
    /// No detail exists under the key.
    Missing { key: String },
    /// A detail exists but holds a different type.
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl DetailLookupError {
    /// Returns the key the lookup was made with.
    #[inline]
    pub fn key(&self) -> &str {
        match self {
            Self::Missing { key } | Self::TypeMismatch { key, .. } => key,
        }
    }
}

impl Display for DetailLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "detail '{}' not found", key),
            Self::TypeMismatch { key, expected, found } => {
                write!(f, "detail '{}' is {} but {} was requested", key, found, expected)
            },
        }
    }
}

impl core::error::Error for DetailLookupError {}
