use super::All as AllTrait;
use crate::utils::{iter_pin_mut_array, Session, WakerVec};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::FusedFuture;
use pin_project::pin_project;

/// A future which waits for all futures to complete successfully, or abort early on error.
///
/// This `struct` is created by the [`all`] method on the [`All`] trait. See
/// its documentation for more.
///
/// [`all`]: crate::future::All::all
/// [`All`]: crate::future::All
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct All<Fut, T, E, const N: usize>
where
    Fut: Future<Output = Result<T, E>>,
{
    consumed: bool,
    session: Session<T>,
    wakers: WakerVec,
    #[pin]
    futures: [Option<Fut>; N],
}

impl<Fut, T, E, const N: usize> All<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    pub(crate) fn new(futures: [Fut; N]) -> Self {
        Self {
            consumed: false,
            session: Session::new(N),
            wakers: WakerVec::new(N),
            futures: futures.map(Some),
        }
    }
}

impl<Fut, T, E, const N: usize> AllTrait for [Fut; N]
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = [T; N];
    type Error = E;
    type Future = All<Fut::IntoFuture, T, E, N>;

    fn all(self) -> Self::Future {
        All::new(self.map(IntoFuture::into_future))
    }
}

impl<Fut, T, E, const N: usize> fmt::Debug for All<Fut, T, E, N>
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

impl<Fut, T, E, const N: usize> Future for All<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<[T; N], E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        let futures = iter_pin_mut_array(this.futures);
        let output = super::poll_ready(futures, this.session, this.wakers, cx);
        if output.is_ready() {
            *this.consumed = true;
        }
        output.map_ok(|items| {
            <[T; N]>::try_from(items)
                .unwrap_or_else(|_| unreachable!("the session holds exactly `N` items"))
        })
    }
}

impl<Fut, T, E, const N: usize> FusedFuture for All<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.consumed
    }
}
