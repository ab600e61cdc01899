//! Tracing integration for ml-result.
//!
//! Failures can be logged as structured `tracing` events and annotated with
//! the span that was active when they happened.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! ml-result = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::result::MlResult;
use crate::types::detail::SPAN_KEY;
use crate::types::alloc_type::Vec;
use crate::types::ErrorDetails;

#[cfg(feature = "async")]
use core::future::Future;
#[cfg(feature = "async")]
use core::pin::Pin;
#[cfg(feature = "async")]
use core::task::{Context, Poll};
#[cfg(feature = "async")]
use pin_project_lite::pin_project;

/// Name of `span`, or `"unknown"` for a disabled span.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}

fn log_failure(details: &ErrorDetails) {
    let keys: Vec<&str> = details.details().keys().map(|k| k.as_str()).collect();
    tracing::warn!(
        error_count = details.len(),
        errors = %details,
        detail_keys = ?keys,
        "result failed"
    );
}

pub(crate) fn log_fatal(message: &str, details: Option<&ErrorDetails>) {
    match details {
        Some(details) => tracing::error!(errors = %details, "{}", message),
        None => tracing::error!("{}", message),
    }
}

impl<T> MlResult<T> {
    /// Emits a `warn` event describing the failure; passes the result through.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = load_config().trace_if_fail();
    /// ```
    pub fn trace_if_fail(self) -> Self {
        if let Some(details) = self.fail_ref() {
            log_failure(details);
        }
        self
    }

    /// Records the current span's name under [`SPAN_KEY`] when failed.
    #[inline]
    pub fn add_span_detail_if_fail(self) -> Self {
        self.add_span_detail_if_fail_with(&Span::current())
    }

    /// Records `span`'s name under [`SPAN_KEY`] when failed.
    #[inline]
    pub fn add_span_detail_if_fail_with(self, span: &Span) -> Self {
        self.add_error_detail_if_fail(SPAN_KEY, span_name(span))
    }
}

/// Extension trait for futures that records span context on failure.
#[cfg(feature = "async")]
pub trait FutureSpanExt<T>: Future<Output = MlResult<T>> + Sized {
    /// Captures the current span now and records its name on failure.
    fn with_span_detail(self) -> SpanDetailFuture<Self> {
        SpanDetailFuture { inner: self, span: Span::current() }
    }

    /// Records the given span's name on failure.
    fn with_span(self, span: Span) -> SpanDetailFuture<Self> {
        SpanDetailFuture { inner: self, span }
    }
}

#[cfg(feature = "async")]
impl<F, T> FutureSpanExt<T> for F where F: Future<Output = MlResult<T>> {}

#[cfg(feature = "async")]
pin_project! {
    /// Future wrapper that records span context on failure.
    ///
    /// Created by [`FutureSpanExt::with_span_detail`] or [`FutureSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanDetailFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

#[cfg(feature = "async")]
impl<F, T> Future for SpanDetailFuture<F>
where
    F: Future<Output = MlResult<T>>,
{
    type Output = MlResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let span = this.span;
        this.inner.poll(cx).map(|result| result.add_span_detail_if_fail_with(span))
    }
}
