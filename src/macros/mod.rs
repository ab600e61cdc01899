//! Ergonomic macros for building errors, details and failures.
//!
//! - [`macro@crate::ml_error`] - Builds an [`MlError`](crate::MlError) from a
//!   format string.
//! - [`macro@crate::details`] - Builds a [`DetailsMap`](crate::types::DetailsMap)
//!   from `key => value` pairs.
//! - [`macro@crate::ml_fail`] - Builds a failed [`MlResult`](crate::MlResult)
//!   from a format string and optional details.
//!
//! # Examples
//!
//! ```
//! use ml_result::{details, ml_error, ml_fail, MlResult};
//!
//! let user_id = 42;
//! let err = ml_error!("user {} not found", user_id);
//! assert_eq!(err.to_string(), "user 42 not found");
//!
//! let bag = details! { "user_id" => user_id, "region" => "eu-west" };
//! assert_eq!(bag.len(), 2);
//!
//! let r: MlResult<()> = ml_fail!("lookup failed"; "user_id" => user_id);
//! assert!(r.is_fail());
//! ```

/// Builds an [`MlError`](crate::MlError) from a message or format string.
///
/// # Examples
///
/// ```
/// use ml_result::ml_error;
///
/// let attempts = 3;
/// let err = ml_error!("gave up after {} attempts", attempts);
/// assert_eq!(err.to_string(), "gave up after 3 attempts");
/// ```
#[macro_export]
macro_rules! ml_error {
    ($($arg:tt)*) => {
        $crate::MlError::new($crate::__format!($($arg)*))
    };
}

/// Builds a [`DetailsMap`](crate::types::DetailsMap) from `key => value` pairs.
///
/// Keys are anything convertible into `String`; values are anything that is
/// `Debug + Send + Sync + 'static`.
///
/// # Examples
///
/// ```
/// use ml_result::details;
///
/// let bag = details! { "attempt" => 2_u8, "host" => "db-1" };
/// assert!(bag.contains_key("attempt"));
/// ```
#[macro_export]
macro_rules! details {
    () => {
        $crate::types::DetailsMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::types::DetailsMap::new();
        $(
            map.insert(
                ::core::convert::Into::into($key),
                $crate::types::detail_value($value),
            );
        )+
        map
    }};
}

/// Builds a failed [`MlResult`](crate::MlResult).
///
/// The message part accepts the same arguments as [`ml_error!`]; detail
/// entries may follow after a `;`.
///
/// # Examples
///
/// ```
/// use ml_result::{ml_fail, MlResult};
///
/// let r: MlResult<u16> = ml_fail!("port {} out of range", 70_000; "max" => 65_535_u32);
/// let details = r.secure_fail_errors_details();
/// assert_eq!(details.first_error().to_string(), "port 70000 out of range");
/// assert_eq!(details.detail_ref::<u32>("max"), Some(&65_535));
/// ```
#[macro_export]
macro_rules! ml_fail {
    ($($arg:expr),+ ; $($key:expr => $value:expr),+ $(,)?) => {
        $crate::MlResult::fail_with_details(
            $crate::ml_error!($($arg),+),
            $crate::details! { $($key => $value),+ },
        )
    };
    ($($arg:tt)*) => {
        $crate::MlResult::fail($crate::ml_error!($($arg)*))
    };
}
