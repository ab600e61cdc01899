//! Atomic failure cause.
//!
//! [`MlError`] describes one reason an operation failed: a message, a
//! captured source error, or both. Errors are immutable once built and carry
//! no identity beyond their rendered content.
use crate::types::alloc_type::{Arc, Cow, String};
use alloc::string::ToString;
use core::fmt::{self, Display};

type Payload = Arc<dyn core::error::Error + Send + Sync + 'static>;

/// One failure cause carried by an [`ErrorDetails`](crate::types::ErrorDetails).
///
/// # Examples
///
/// ```
/// use ml_result::MlError;
///
/// let err = MlError::new("bad input");
/// assert_eq!(err.to_string(), "bad input");
///
/// let parsed = "x".parse::<i32>().map_err(MlError::from_source);
/// assert!(parsed.unwrap_err().payload().is_some());
/// ```
#[must_use]
#[derive(Clone)]
pub struct MlError {
    message: Option<Cow<'static, str>>,
    payload: Option<Payload>,
}

impl MlError {
    /// Creates an error from a message.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: Some(message.into()), payload: None }
    }

    /// Creates an error wrapping a captured source error.
    ///
    /// The error's message is the source's description.
    #[inline]
    pub fn from_source<E>(source: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self { message: None, payload: Some(Arc::new(source)) }
    }

    /// Creates an error with both a message and a captured source error.
    #[inline]
    pub fn with_source<M, E>(message: M, source: E) -> Self
    where
        M: Into<Cow<'static, str>>,
        E: core::error::Error + Send + Sync + 'static,
    {
        Self { message: Some(message.into()), payload: Some(Arc::new(source)) }
    }

    /// Returns the explicit message, or the payload's description when no
    /// message was given.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match (&self.message, &self.payload) {
            (Some(message), _) => Cow::Borrowed(message.as_ref()),
            (None, Some(payload)) => Cow::Owned(payload.to_string()),
            (None, None) => Cow::Borrowed(""),
        }
    }

    /// Returns `true` if an explicit message was supplied.
    #[must_use]
    #[inline]
    pub fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// Returns the captured source error, if any.
    #[must_use]
    #[inline]
    pub fn payload(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.payload.as_deref()
    }

    /// Attempts to downcast the captured source error to a concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: core::error::Error + 'static,
    {
        self.payload.as_deref()?.downcast_ref::<E>()
    }

    #[cfg(feature = "serde")]
    fn payload_description(&self) -> Option<String> {
        self.payload.as_ref().map(|payload| payload.to_string())
    }
}

impl Display for MlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl fmt::Debug for MlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("MlError");
        if let Some(message) = &self.message {
            debug.field("message", message);
        }
        if let Some(payload) = &self.payload {
            debug.field("payload", payload);
        }
        debug.finish()
    }
}

/// Errors are equal when their effective messages are: the explicit message,
/// or the payload's description when no message was given.
impl PartialEq for MlError {
    fn eq(&self, other: &Self) -> bool {
        self.message() == other.message()
    }
}

impl Eq for MlError {}

impl core::error::Error for MlError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.payload.as_deref().map(|payload| payload as &(dyn core::error::Error + 'static))
    }
}

impl From<&'static str> for MlError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for MlError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Cow<'static, str>> for MlError {
    #[inline]
    fn from(message: Cow<'static, str>) -> Self {
        Self::new(message)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::MlError;
    use crate::types::alloc_type::String;
    use serde::de::Deserializer;
    use serde::ser::{SerializeStruct, Serializer};
    use serde::{Deserialize, Serialize};

    impl Serialize for MlError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("MlError", 2)?;
            state.serialize_field("message", &self.message())?;
            state.serialize_field("payload", &self.payload_description())?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    struct Wire {
        message: String,
    }

    /// Deserialized errors carry the rendered message only; payloads do not
    /// survive the trip.
    impl<'de> Deserialize<'de> for MlError {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let wire = Wire::deserialize(deserializer)?;
            Ok(MlError::new(wire.message))
        }
    }
}
