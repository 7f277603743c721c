use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use crate::utils::{lock, Session, WakerVec};

pub(crate) mod array;
pub(crate) mod vec;

/// Wait for all futures to complete successfully, or abort early on error.
///
/// Awaits multiple fallible futures simultaneously. Their outputs are returned
/// in the order the futures were passed in, no matter in which order they
/// completed. The first error observed is returned as-is, without waiting for
/// the remaining futures.
pub trait All {
    /// The resulting output type.
    type Output;

    /// The resulting error type.
    type Error;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Result<Self::Output, Self::Error>>;

    /// Waits for multiple futures to complete, either returning when all
    /// futures complete successfully, or return early when any future completes
    /// with an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fan_in::prelude::*;
    /// use futures_lite::future::block_on;
    /// use std::future;
    ///
    /// block_on(async {
    ///     let a = future::ready(Ok::<_, &str>(1));
    ///     let b = future::ready(Ok(2));
    ///     assert_eq!(vec![a, b].all().await, Ok(vec![1, 2]));
    ///
    ///     let a = future::ready(Ok(1));
    ///     let b = future::ready(Err("oh no"));
    ///     assert_eq!([a, b].all().await, Err("oh no"));
    /// })
    /// ```
    fn all(self) -> Self::Future;
}

/// Wait for every future in an iterator to complete successfully, or abort
/// early on error.
///
/// This is the free-standing form of [`All::all`] for anything that can be
/// iterated over. Outputs are returned in iteration order.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use std::future;
///
/// block_on(async {
///     let futures = (0..3).map(|n| future::ready(Ok::<_, ()>(n * 2)));
///     assert_eq!(fan_in::future::all(futures).await, Ok(vec![0, 2, 4]));
/// })
/// ```
pub fn all<I, T, E>(futures: I) -> vec::All<<I::Item as IntoFuture>::IntoFuture, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    vec::All::new(futures.into_iter().map(IntoFuture::into_future).collect())
}

/// Poll every future which was woken since the last poll, feeding each
/// outcome into the session. Settled futures are dropped in place.
///
/// Each future is polled with its own waker from `wakers`, so a wake-up only
/// causes the future it belongs to to be polled again.
pub(crate) fn poll_ready<'a, Fut, T, E>(
    futures: impl Iterator<Item = Pin<&'a mut Option<Fut>>>,
    session: &mut Session<T>,
    wakers: &WakerVec,
    cx: &mut Context<'_>,
) -> Poll<Result<Vec<T>, E>>
where
    Fut: Future<Output = Result<T, E>> + 'a,
{
    if let Some(items) = session.finish_empty() {
        return Poll::Ready(Ok(items));
    }

    let mut readiness = lock(wakers.readiness());
    readiness.set_waker(cx.waker());
    if !readiness.any_ready() {
        // Nothing is ready yet
        return Poll::Pending;
    }

    for (i, mut slot) in futures.enumerate() {
        if !readiness.clear_ready(i) {
            continue;
        }
        let Some(fut) = slot.as_mut().as_pin_mut() else {
            // Already settled, but its waker fired anyway.
            continue;
        };

        // unlock readiness so we don't deadlock when polling
        drop(readiness);

        let mut cx = Context::from_waker(wakers.get(i));
        if let Poll::Ready(outcome) = fut.poll(&mut cx) {
            slot.set(None);
            if let Some(output) = session.settle(i, outcome) {
                return Poll::Ready(output);
            }
        }

        // Lock readiness so we can use it again
        readiness = lock(wakers.readiness());
    }

    Poll::Pending
}
