//! Futures which complete one after the other in a fixed, shuffled order.
//!
//! Every future holds a rank. The future with rank `n` only completes after
//! the future with rank `n - 1` did, and then wakes rank `n + 1`. The ranks
//! are shuffled over the input, so outputs arrive out of input order and
//! each completion wakes a single future.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use rand::seq::SliceRandom;
use rand::SeedableRng;

/// `len` futures which succeed with their own rank.
pub fn futures_vec(len: usize) -> Vec<RelayFuture> {
    relay(len, None)
}

/// Like [`futures_vec`], except the future with rank `fail_at` fails.
#[allow(unused)]
pub fn failing_futures_vec(len: usize, fail_at: usize) -> Vec<RelayFuture> {
    relay(len, Some(fail_at))
}

#[allow(unused)]
pub fn futures_array<const N: usize>() -> [RelayFuture; N] {
    let mut futures = relay(N, None).into_iter();
    std::array::from_fn(|_| futures.next().unwrap())
}

fn relay(len: usize, fail_at: Option<usize>) -> Vec<RelayFuture> {
    let baton = Rc::new(RefCell::new(Baton {
        next: 0,
        parked: vec![None; len],
    }));
    let mut ranks: Vec<usize> = (0..len).collect();
    ranks.shuffle(&mut rand::rngs::StdRng::seed_from_u64(42));
    ranks
        .into_iter()
        .map(|rank| RelayFuture {
            rank,
            fails: fail_at == Some(rank),
            baton: baton.clone(),
        })
        .collect()
}

struct Baton {
    /// The rank allowed to complete next.
    next: usize,
    parked: Vec<Option<Waker>>,
}

pub struct RelayFuture {
    rank: usize,
    fails: bool,
    baton: Rc<RefCell<Baton>>,
}

impl Future for RelayFuture {
    type Output = Result<usize, usize>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut baton = self.baton.borrow_mut();
        if baton.next != self.rank {
            baton.parked[self.rank] = Some(cx.waker().clone());
            return Poll::Pending;
        }

        baton.next += 1;
        if let Some(waker) = baton.parked.get_mut(self.rank + 1).and_then(Option::take) {
            waker.wake();
        }
        if self.fails {
            Poll::Ready(Err(self.rank))
        } else {
            Poll::Ready(Ok(self.rank))
        }
    }
}
