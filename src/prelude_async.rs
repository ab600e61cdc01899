//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! deferred combinators and composers.
//!
//! # Usage
//!
//! ```ignore
//! use ml_result::prelude_async::*;
//!
//! async fn load(id: u64) -> MlResult<Order> {
//!     fetch_order(id)
//!         .add_error_detail_if_fail("order_id", id)
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! - Everything in [`prelude`](crate::prelude)
//! - **Traits**: [`FutureMlResultExt`](crate::async_ext::FutureMlResultExt)
//! - **Types**: [`MatchFuture`](crate::async_ext::MatchFuture)
//! - **Composers**: `create_complete_ml_result*_async`

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
#[cfg(feature = "async")]
pub use crate::async_ext::{
    create_complete_ml_result3_async, create_complete_ml_result_async,
    create_complete_ml_result_from_value_async, create_complete_ml_result_with_value_async,
    FutureMlResultExt, MatchFuture,
};

#[cfg(all(feature = "async", feature = "tracing"))]
pub use crate::tracing_ext::FutureSpanExt;
