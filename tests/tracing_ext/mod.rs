//! Tests for tracing integration.

use ml_result::{MlError, MlResult, SPAN_KEY};
use tracing::subscriber::with_default;

fn subscriber() -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt().with_test_writer().finish()
}

fn failed() -> MlResult<i32> {
    MlResult::fail(MlError::new("boom"))
}

#[test]
fn trace_if_fail_passes_results_through() {
    with_default(subscriber(), || {
        assert_eq!(MlResult::valid(1).trace_if_fail(), MlResult::valid(1));

        let details = failed().add_error_detail_if_fail("k", 1).trace_if_fail().secure_fail_errors_details();
        assert_eq!(details.first_error(), &MlError::new("boom"));
        assert!(details.contains_detail("k"));
    });
}

#[test]
fn add_span_detail_if_fail_records_the_current_span() {
    with_default(subscriber(), || {
        let span = tracing::info_span!("load_user");
        let _entered = span.enter();

        let details = failed().add_span_detail_if_fail().secure_fail_errors_details();
        assert_eq!(details.detail_ref::<&str>(SPAN_KEY), Some(&"load_user"));
    });
}

#[test]
fn add_span_detail_if_fail_with_uses_the_given_span() {
    with_default(subscriber(), || {
        let span = tracing::info_span!("checkout");

        let details = failed().add_span_detail_if_fail_with(&span).secure_fail_errors_details();
        assert_eq!(details.detail_ref::<&str>(SPAN_KEY), Some(&"checkout"));
    });
}

#[test]
fn span_details_are_not_added_to_valid_results() {
    with_default(subscriber(), || {
        let span = tracing::info_span!("checkout");
        assert_eq!(MlResult::valid(3).add_span_detail_if_fail_with(&span), MlResult::valid(3));
    });
}

#[test]
#[should_panic(expected = "secure_valid_value called on a failed result")]
fn fatal_escape_hatch_still_panics_with_logging() {
    with_default(subscriber(), || {
        let _ = failed().secure_valid_value();
    });
}

#[cfg(feature = "async")]
mod future_span {
    use ml_result::prelude_async::*;
    use ml_result::SPAN_KEY;

    #[tokio::test]
    async fn with_span_records_the_span_on_failure() {
        let _guard = tracing::subscriber::set_default(super::subscriber());
        let span = tracing::info_span!("fetch_orders");

        let details = async { MlResult::<i32>::fail(MlError::new("timeout")) }
            .with_span(span)
            .await
            .secure_fail_errors_details();

        assert_eq!(details.detail_ref::<&str>(SPAN_KEY), Some(&"fetch_orders"));
    }

    #[tokio::test]
    async fn with_span_detail_captures_the_span_at_creation() {
        let _guard = tracing::subscriber::set_default(super::subscriber());
        let span = tracing::info_span!("sync_inventory");

        let pending = {
            let _entered = span.enter();
            async { MlResult::<i32>::fail(MlError::new("conflict")) }.with_span_detail()
        };
        let details = pending.await.secure_fail_errors_details();

        assert_eq!(details.detail_ref::<&str>(SPAN_KEY), Some(&"sync_inventory"));
    }

    #[tokio::test]
    async fn with_span_passes_valid_results_through() {
        let result = async { MlResult::valid(5) }.with_span(tracing::Span::none()).await;
        assert_eq!(result, MlResult::valid(5));
    }
}
