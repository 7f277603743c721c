use std::sync::{Arc, Mutex};
use std::task::Waker;

use super::waker::IndexWaker;
use super::Readiness;

/// One waker per future, all sharing a single [`Readiness`].
pub(crate) struct WakerVec {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<Readiness>>,
}

impl WakerVec {
    /// Create a new instance of `WakerVec`.
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(Readiness::new(len)));
        let wakers = (0..len)
            .map(|i| Arc::new(IndexWaker::new(i, readiness.clone())).into())
            .collect();
        Self { wakers, readiness }
    }

    pub(crate) fn get(&self, index: usize) -> &Waker {
        &self.wakers[index]
    }

    /// Access the `Readiness`.
    pub(crate) fn readiness(&self) -> &Mutex<Readiness> {
        self.readiness.as_ref()
    }
}
