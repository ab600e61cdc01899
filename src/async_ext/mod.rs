//! Async extensions for ml-result.
//!
//! This module provides the deferred forms of the match primitive, the
//! combinators and the product composers. No work is spawned: every
//! deferred operation only awaits futures the caller supplied.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! ml-result = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use ml_result::prelude_async::*;
//!
//! async fn fetch_profile(id: u64) -> MlResult<(User, Settings)> {
//!     create_complete_ml_result_async(fetch_user(id), fetch_settings(id))
//!         .add_error_detail_if_fail("user_id", id)
//!         .await
//! }
//! ```

mod compose;
mod future_ext;
mod match_future;

pub use compose::{
    create_complete_ml_result3_async, create_complete_ml_result_async,
    create_complete_ml_result_from_value_async, create_complete_ml_result_with_value_async,
};
pub use future_ext::FutureMlResultExt;
pub use match_future::MatchFuture;
