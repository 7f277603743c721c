use core::fmt;
use core::mem;

use tracing::trace;

/// Enumerate the state of an aggregation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum SessionState {
    /// At least one task has not reported yet.
    Pending,
    /// Every task succeeded and the ordered results were handed out.
    Succeeded,
    /// A task failed and its failure was handed out.
    Failed,
}

impl SessionState {
    /// Returns `true` if the state is [`Pending`][Self::Pending].
    #[must_use]
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the state is either [`Succeeded`][Self::Succeeded]
    /// or [`Failed`][Self::Failed].
    #[must_use]
    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        !self.is_pending()
    }
}

/// The bookkeeping for one fan-out: a results slot per task, the number of
/// successes seen so far, and whether the aggregate has settled.
///
/// Every outcome is fed through [`Session::settle`]. Exactly one call ever
/// returns `Some`; all calls after that are no-ops and the value they carry
/// is dropped.
pub(crate) struct Session<T> {
    state: SessionState,
    completed: usize,
    len: usize,
    results: Vec<Option<T>>,
}

impl<T> Session<T> {
    /// Create a new session for `len` tasks.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            state: SessionState::Pending,
            completed: 0,
            len,
            results: core::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// The number of tasks which have succeeded so far.
    #[cfg(test)]
    pub(crate) fn completed(&self) -> usize {
        self.completed
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    /// Settle a session which has no tasks at all.
    ///
    /// Returns the empty result the first time it's called on an empty
    /// session, and `None` otherwise.
    pub(crate) fn finish_empty(&mut self) -> Option<Vec<T>> {
        if self.len != 0 || self.state.is_terminal() {
            return None;
        }
        self.state = SessionState::Succeeded;
        trace!(tasks = 0, "fan-in succeeded without tasks");
        Some(Vec::new())
    }

    /// Record the outcome of the task at `index`.
    ///
    /// Returns the aggregate outcome if this call moved the session into a
    /// terminal state.
    pub(crate) fn settle<E>(
        &mut self,
        index: usize,
        outcome: Result<T, E>,
    ) -> Option<Result<Vec<T>, E>> {
        if self.state.is_terminal() {
            return None;
        }
        match outcome {
            Ok(value) => self.succeed(index, value).map(Ok),
            Err(err) => {
                self.state = SessionState::Failed;
                trace!(tasks = self.len, index, "fan-in failed");
                // Nobody will read the partial results.
                self.results = Vec::new();
                Some(Err(err))
            }
        }
    }

    fn succeed(&mut self, index: usize, value: T) -> Option<Vec<T>> {
        let slot = &mut self.results[index];
        debug_assert!(slot.is_none(), "task {index} reported twice");
        *slot = Some(value);
        self.completed += 1;

        if self.completed < self.len {
            return None;
        }

        self.state = SessionState::Succeeded;
        trace!(tasks = self.len, "fan-in succeeded");
        let results = mem::take(&mut self.results)
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| unreachable!("all slots are filled on success")))
            .collect();
        Some(results)
    }
}

impl<T> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("completed", &self.completed)
            .field("len", &self.len)
            .finish()
    }
}
