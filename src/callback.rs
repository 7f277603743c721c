//! Callback-style fan-out.
//!
//! Every task is a starter closure which receives a [`Completion`] handle and
//! reports its outcome through it, once, whenever it's done. The batch as a
//! whole reports through a single final handler.
//!
//! Completion handles may be moved to other threads, timers, or runtime
//! tasks, so the state they share sits behind a mutex. The final handler is
//! never invoked while that mutex is held.
//!
//! # Examples
//!
//! ```
//! use fan_in::callback::{when_all, Completion};
//! use std::sync::mpsc;
//! use std::thread;
//!
//! let (sender, receiver) = mpsc::channel();
//! let tasks = (0..3).map(|n| {
//!     move |done: Completion<u32, String>| {
//!         thread::spawn(move || done.ok(n * 10));
//!     }
//! });
//! when_all(tasks, move |outcome| sender.send(outcome).unwrap());
//!
//! assert_eq!(receiver.recv().unwrap(), Ok(vec![0, 10, 20]));
//! ```

use core::convert::Infallible;
use core::fmt;
use std::sync::{Arc, Mutex};

use crate::utils::{lock, Session};

type Done<T, E> = Box<dyn FnOnce(Result<Vec<T>, E>) + Send>;

struct Shared<T, E> {
    session: Session<T>,
    done: Option<Done<T, E>>,
}

/// The handle a single task uses to report its outcome.
///
/// Settling consumes the handle, so every task reports at most once. A task
/// which drops its handle without settling it keeps the batch from ever
/// succeeding.
pub struct Completion<T, E> {
    index: usize,
    shared: Arc<Mutex<Shared<T, E>>>,
}

impl<T, E> Completion<T, E> {
    /// The position of this task in the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Report that the task succeeded with `value`.
    pub fn ok(self, value: T) {
        self.settle(Ok(value))
    }

    /// Report that the task failed with `err`.
    ///
    /// If this is the first failure of the batch, the final handler is
    /// called with `err` right away.
    pub fn err(self, err: E) {
        self.settle(Err(err))
    }

    /// Report the outcome of the task.
    ///
    /// Outcomes reported after the batch has settled are dropped.
    pub fn settle(self, outcome: Result<T, E>) {
        let mut shared = lock(&self.shared);
        let Some(output) = shared.session.settle(self.index, outcome) else {
            return;
        };
        let done = shared.done.take();
        drop(shared);

        if let Some(done) = done {
            done(output);
        }
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = lock(&self.shared);
        f.debug_struct("Completion")
            .field("index", &self.index)
            .field("session", &shared.session)
            .finish()
    }
}

/// Start every task and call `done` once with the combined outcome.
///
/// All tasks are started right away, in input order, before this function
/// returns. `done` receives either every value in input order, or the first
/// error any task reported. Tasks still running after a failure are left
/// alone, and whatever they report later is dropped.
///
/// With no tasks, `done` is called with an empty `Vec` before this function
/// returns.
///
/// # Examples
///
/// ```
/// use fan_in::callback::{when_all, Completion};
/// use std::sync::mpsc;
///
/// let (sender, receiver) = mpsc::channel();
/// let tasks: Vec<Box<dyn FnOnce(Completion<u8, &str>)>> = vec![
///     Box::new(|done: Completion<u8, &str>| done.ok(1)),
///     Box::new(|done: Completion<u8, &str>| done.err("boom")),
///     Box::new(|done: Completion<u8, &str>| done.ok(3)),
/// ];
/// when_all(tasks, move |outcome| sender.send(outcome).unwrap());
///
/// assert_eq!(receiver.try_iter().collect::<Vec<_>>(), [Err("boom")]);
/// ```
pub fn when_all<I, S, T, E, F>(tasks: I, done: F)
where
    I: IntoIterator<Item = S>,
    S: FnOnce(Completion<T, E>),
    F: FnOnce(Result<Vec<T>, E>) + Send + 'static,
{
    let tasks: Vec<S> = tasks.into_iter().collect();
    let mut session = Session::new(tasks.len());
    if let Some(items) = session.finish_empty() {
        done(Ok(items));
        return;
    }

    let shared = Arc::new(Mutex::new(Shared {
        session,
        done: Some(Box::new(done)),
    }));
    for (index, task) in tasks.into_iter().enumerate() {
        task(Completion {
            index,
            shared: Arc::clone(&shared),
        });
    }
}

/// Start every job and call `done` once with all of their values.
///
/// This is [`when_all`] for jobs which can't fail. The values are passed to
/// `done` in input order, no matter in which order the jobs finished.
///
/// # Examples
///
/// ```
/// use fan_in::callback::map_all;
/// use std::sync::mpsc;
/// use std::thread;
/// use std::time::Duration;
///
/// let (sender, receiver) = mpsc::channel();
/// let jobs = [("one", 30), ("two", 10)].map(|(name, ms)| {
///     move |done: fan_in::callback::Completion<_, _>| {
///         thread::spawn(move || {
///             thread::sleep(Duration::from_millis(ms));
///             done.ok(name);
///         });
///     }
/// });
/// map_all(jobs, move |names| sender.send(names).unwrap());
///
/// assert_eq!(receiver.recv().unwrap(), ["one", "two"]);
/// ```
pub fn map_all<I, S, T, F>(jobs: I, done: F)
where
    I: IntoIterator<Item = S>,
    S: FnOnce(Completion<T, Infallible>),
    F: FnOnce(Vec<T>) + Send + 'static,
{
    when_all(jobs, move |outcome| match outcome {
        Ok(items) => done(items),
        Err(never) => match never {},
    })
}
