use super::All as AllTrait;
use crate::utils::{iter_pin_mut_vec, Session, WakerVec};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::FusedFuture;
use pin_project::pin_project;

/// A future which waits for all futures to complete successfully, or abort early on error.
///
/// This `struct` is created by the [`all`] method on the [`All`] trait, and
/// by the [`future::all`] function. See their documentation for more.
///
/// [`all`]: crate::future::All::all
/// [`All`]: crate::future::All
/// [`future::all`]: crate::future::all
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct All<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// A boolean which holds whether the future has completed
    consumed: bool,
    /// The ordered output slots, and whether we've settled yet
    session: Session<T>,
    /// A structure holding the waker passed to the future, and the various
    /// sub-wakers passed to the contained futures.
    wakers: WakerVec,
    /// The futures passed to the structure. Each entry is set to `None` as
    /// soon as its future settles.
    #[pin]
    futures: Vec<Option<Fut>>,
}

impl<Fut, T, E> All<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    pub(crate) fn new(futures: Vec<Fut>) -> Self {
        Self {
            consumed: false,
            session: Session::new(futures.len()),
            wakers: WakerVec::new(futures.len()),
            futures: futures.into_iter().map(Some).collect(),
        }
    }
}

impl<Fut, T, E> AllTrait for Vec<Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = Vec<T>;
    type Error = E;
    type Future = All<Fut::IntoFuture, T, E>;

    fn all(self) -> Self::Future {
        All::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}

impl<Fut, T, E> fmt::Debug for All<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field("consumed", &self.consumed)
            .field("session", &self.session)
            .finish()
    }
}

impl<Fut, T, E> Future for All<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        let futures = iter_pin_mut_vec(this.futures);
        let output = super::poll_ready(futures, this.session, this.wakers, cx);
        if output.is_ready() {
            *this.consumed = true;
        }
        output
    }
}

impl<Fut, T, E> FusedFuture for All<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.consumed
    }
}
