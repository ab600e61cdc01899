//! Future form of the match dispatch primitive.
//!
//! [`MatchFuture`] awaits a future resolving to an [`MlResult`], then calls
//! exactly one of two branch closures and awaits the future that branch
//! returns. The other closure is dropped without ever being called.

use core::future::{Future, IntoFuture, Ready};
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::result::MlResult;
use crate::types::ErrorDetails;

pin_project! {
    #[project = BranchProj]
    enum Branch<V, F> {
        Valid { #[pin] future: V },
        Fail { #[pin] future: F },
    }
}

pin_project! {
    /// A future that dispatches on a deferred [`MlResult`].
    ///
    /// Created by [`FutureMlResultExt::match_async`](super::FutureMlResultExt::match_async)
    /// and [`MlResult::match_async`].
    ///
    /// # Cancel Safety
    ///
    /// `MatchFuture` is cancel-safe if the source future and the selected
    /// branch future are. Dropping it before the source resolves means
    /// neither branch closure is ever called.
    #[must_use = "futures do nothing unless polled"]
    pub struct MatchFuture<Fut, OnValid, OnFail, ValidFut, FailFut> {
        #[pin]
        source: Fut,
        handlers: Option<(OnValid, OnFail)>,
        #[pin]
        branch: Option<Branch<ValidFut, FailFut>>,
    }
}

impl<Fut, OnValid, OnFail, ValidFut, FailFut> MatchFuture<Fut, OnValid, OnFail, ValidFut, FailFut> {
    /// Creates a new `MatchFuture` over `source` with the two branch closures.
    #[inline]
    pub fn new(source: Fut, on_valid: OnValid, on_fail: OnFail) -> Self {
        Self { source, handlers: Some((on_valid, on_fail)), branch: None }
    }
}

impl<Fut, T, OnValid, OnFail, ValidFut, FailFut, R> Future
    for MatchFuture<Fut, OnValid, OnFail, ValidFut, FailFut>
where
    Fut: Future<Output = MlResult<T>>,
    OnValid: FnOnce(T) -> ValidFut,
    OnFail: FnOnce(ErrorDetails) -> FailFut,
    ValidFut: Future<Output = R>,
    FailFut: Future<Output = R>,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            if let Some(branch) = this.branch.as_mut().as_pin_mut() {
                return match branch.project() {
                    BranchProj::Valid { future } => future.poll(cx),
                    BranchProj::Fail { future } => future.poll(cx),
                };
            }

            let source = ready!(this.source.as_mut().poll(cx));
            let (on_valid, on_fail) = this
                .handlers
                .take()
                .expect("MatchFuture polled after completion; this is a bug");
            let branch = match source {
                MlResult::Valid(value) => Branch::Valid { future: on_valid(value) },
                MlResult::Fail(details) => Branch::Fail { future: on_fail(details) },
            };
            this.branch.set(Some(branch));
        }
    }
}

impl<Fut, T, OnValid, OnFail, ValidFut, FailFut, R> FusedFuture
    for MatchFuture<Fut, OnValid, OnFail, ValidFut, FailFut>
where
    Fut: Future<Output = MlResult<T>>,
    OnValid: FnOnce(T) -> ValidFut,
    OnFail: FnOnce(ErrorDetails) -> FailFut,
    ValidFut: FusedFuture<Output = R>,
    FailFut: FusedFuture<Output = R>,
{
    fn is_terminated(&self) -> bool {
        match &self.branch {
            Some(Branch::Valid { future }) => future.is_terminated(),
            Some(Branch::Fail { future }) => future.is_terminated(),
            None => false,
        }
    }
}

/// An `MlResult` is an already-resolved deferred value, so immediate and
/// deferred operands can be mixed freely wherever an `IntoFuture` is accepted.
impl<T> IntoFuture for MlResult<T> {
    type Output = MlResult<T>;
    type IntoFuture = Ready<MlResult<T>>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        core::future::ready(self)
    }
}

impl<T> MlResult<T> {
    /// Deferred-branch form of [`match_with`](MlResult::match_with).
    ///
    /// Exactly one branch closure is called; the future it returns is
    /// awaited to produce the output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ml_result::MlResult;
    ///
    /// async fn example() {
    ///     let label = MlResult::valid(3)
    ///         .match_async(
    ///             |v| async move { format!("got {v}") },
    ///             |d| async move { format!("failed: {d}") },
    ///         )
    ///         .await;
    ///     assert_eq!(label, "got 3");
    /// }
    /// ```
    #[inline]
    pub fn match_async<OnValid, OnFail, ValidFut, FailFut>(
        self,
        on_valid: OnValid,
        on_fail: OnFail,
    ) -> MatchFuture<Ready<Self>, OnValid, OnFail, ValidFut, FailFut>
    where
        OnValid: FnOnce(T) -> ValidFut,
        OnFail: FnOnce(ErrorDetails) -> FailFut,
    {
        MatchFuture::new(self.into_future(), on_valid, on_fail)
    }
}
