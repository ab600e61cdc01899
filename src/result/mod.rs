//! The [`MlResult`] sum type and its combinators.
//!
//! [`MlResult<T>`] holds either a value or an [`ErrorDetails`](crate::ErrorDetails)
//! describing why no value could be produced. All inspection goes through the
//! [`match_with`](MlResult::match_with) dispatch primitive (or the
//! `is_valid`/`is_fail` predicates and the fatal `secure_*` escape hatches).
//!
//! # Key Components
//!
//! - [`MlResult`] - Core type: `Valid(T)` or `Fail(ErrorDetails)`
//! - Combinators attaching details to failures and transforming values
//! - Iterator adapters and `FromIterator` collection with merged failures
//!
//! # Examples
//!
//! ```
//! use ml_result::{MlError, MlResult};
//!
//! fn parse_port(raw: &str) -> MlResult<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => MlResult::valid(port),
//!         Err(_) => MlResult::fail(MlError::new("invalid port")),
//!     }
//! }
//!
//! let port = parse_port("80x").add_value_detail_if_fail("80x");
//! let value = port.secure_fail_errors_details().get_detail_value::<&str>();
//! assert_eq!(value, MlResult::valid("80x"));
//! ```
pub mod combinators;
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
