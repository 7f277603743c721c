//! Utilities shared by the different fan-in flavors.

use std::sync::{Mutex, MutexGuard, PoisonError};

mod pin;
mod session;
mod wakers;

pub(crate) use pin::{iter_pin_mut_array, iter_pin_mut_vec};
pub(crate) use session::Session;
pub(crate) use wakers::WakerVec;

/// Lock `mutex`, recovering the guard if a previous holder panicked.
///
/// None of the state behind our mutexes is left half-updated across user
/// code, so a poisoned lock is still consistent.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
