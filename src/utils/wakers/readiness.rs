use core::task::Waker;
use fixedbitset::FixedBitSet;

/// Tracks which futures have been woken and should be polled again.
#[derive(Debug)]
pub(crate) struct Readiness {
    ready_count: usize,
    ready: FixedBitSet,
    parent_waker: Option<Waker>,
}

impl Readiness {
    /// Create a new instance with every index marked as ready, so the first
    /// poll reaches every future.
    pub(crate) fn new(len: usize) -> Self {
        let mut ready = FixedBitSet::with_capacity(len);
        ready.insert_range(..);
        Self {
            ready_count: len,
            ready,
            parent_waker: None,
        }
    }

    /// Mark the future at `index` as ready.
    ///
    /// Returns whether it was already marked.
    pub(crate) fn set_ready(&mut self, index: usize) -> bool {
        let was_ready = self.ready.put(index);
        if !was_ready {
            self.ready_count += 1;
        }
        was_ready
    }

    /// Clear the mark of the future at `index`.
    ///
    /// Returns whether it was marked.
    pub(crate) fn clear_ready(&mut self, index: usize) -> bool {
        if self.ready.contains(index) {
            self.ready.set(index, false);
            self.ready_count -= 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if any of the futures are ready.
    pub(crate) fn any_ready(&self) -> bool {
        self.ready_count > 0
    }

    /// Access the parent waker.
    #[inline]
    pub(crate) fn parent_waker(&self) -> Option<&Waker> {
        self.parent_waker.as_ref()
    }

    /// Set the parent `Waker`. This needs to be called at the start of every
    /// `poll` function.
    pub(crate) fn set_waker(&mut self, parent_waker: &Waker) {
        match &mut self.parent_waker {
            Some(prev) => prev.clone_from(parent_waker),
            None => self.parent_waker = Some(parent_waker.clone()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_all_ready() {
        let mut readiness = Readiness::new(3);
        assert!(readiness.any_ready());
        assert!(readiness.clear_ready(0));
        assert!(readiness.clear_ready(1));
        assert!(readiness.clear_ready(2));
        assert!(!readiness.any_ready());
        assert!(!readiness.clear_ready(1));
    }

    #[test]
    fn set_ready_is_counted_once() {
        let mut readiness = Readiness::new(2);
        readiness.clear_ready(0);
        readiness.clear_ready(1);
        assert!(!readiness.set_ready(1));
        assert!(readiness.set_ready(1));
        assert!(readiness.clear_ready(1));
        assert!(!readiness.any_ready());
    }

    #[test]
    fn empty() {
        assert!(!Readiness::new(0).any_ready());
    }
}
