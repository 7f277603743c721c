//! Fan out a fixed set of asynchronous tasks, and fan their outcomes back in.
//!
//! Given a collection of independent, fallible tasks known up front, this
//! library produces exactly one combined outcome: either every task's value,
//! in the order the tasks were passed in, or the first error any task
//! reported. It comes in two shapes:
//!
//! - [`future::All`]: a future which waits for all futures to complete
//!   successfully, or aborts early on error.
//! - [`callback::when_all`]: the same semantics for callback-driven tasks,
//!   which report through a [`callback::Completion`] handle.
//!
//! # Examples
//!
//! Concurrently await multiple fallible futures:
//! ```rust
//! use fan_in::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let a = future::ready(Ok::<_, String>(1));
//!     let b = future::ready(Ok(2));
//!     let c = future::ready(Ok(3));
//!     assert_eq!(vec![a, b, c].all().await, Ok(vec![1, 2, 3]));
//! })
//! ```
//!
//! # Semantics
//!
//! - Outputs are stored by input position, so completion order never affects
//!   output order.
//! - The first error settles the aggregate immediately. Errors are passed
//!   through as-is, and no partial results are returned.
//! - Anything a task reports after the aggregate has settled is dropped.
//! - With no tasks at all, the aggregate succeeds immediately with an empty
//!   output.
//!
//! There's no cancellation, timeout, or concurrency limit: every task is
//! started at once, and runs for as long as it runs.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

/// The fan-in prelude.
pub mod prelude {
    pub use super::future::All as _;
}

pub mod callback;
pub mod future;

/// Helper functions and types for fixed-length arrays.
pub mod array {
    pub use crate::future::all::array::All;
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::future::all::vec::All;
}
