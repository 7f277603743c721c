use std::sync::{Arc, Mutex};
use std::task::Wake;

use super::Readiness;
use crate::utils::lock;

/// A waker which marks one index as ready before waking the parent task.
#[derive(Debug)]
pub(crate) struct IndexWaker {
    index: usize,
    readiness: Arc<Mutex<Readiness>>,
}

impl IndexWaker {
    pub(crate) fn new(index: usize, readiness: Arc<Mutex<Readiness>>) -> Self {
        Self { index, readiness }
    }
}

impl Wake for IndexWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref()
    }

    fn wake_by_ref(self: &Arc<Self>) {
        let mut readiness = lock(&self.readiness);
        // Only the first wake since the last poll needs to reach the parent.
        if !readiness.set_ready(self.index) {
            if let Some(waker) = readiness.parent_waker() {
                waker.wake_by_ref();
            }
        }
    }
}
