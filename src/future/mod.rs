//! Fan-in over futures.
//!
//! The [`All`] trait turns a `Vec` or array of fallible futures into a single
//! future. That future resolves to every output in input order once all of
//! them succeeded, or to the first error as soon as it's observed.
//!
//! # Examples
//!
//! ```
//! use fan_in::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! fn main() {
//!     block_on(async {
//!         // Await multiple similarly-typed fallible futures.
//!         let a = future::ready(Ok::<_, &str>(1));
//!         let b = future::ready(Ok(2));
//!         let c = future::ready(Ok(3));
//!         assert_eq!([a, b, c].all().await, Ok([1, 2, 3]));
//!
//!         // The first error is returned as-is.
//!         let a = future::ready(Ok(1));
//!         let b = future::ready(Err("oh no"));
//!         assert_eq!(vec![a, b].all().await, Err("oh no"));
//!
//!         // No futures at all resolve right away.
//!         let none: Vec<future::Ready<Result<u8, ()>>> = vec![];
//!         assert_eq!(none.all().await, Ok(vec![]));
//!     })
//! }
//! ```
//!
//! | Name  | Return signature        | When does it return?                       |
//! | ---   | ---                     | ---                                        |
//! | `All` | `Result<Vec<T>, E>`     | Return on  `Err`, wait for all to complete |
//!
//! Futures are polled in place and dropped as soon as they settle. When the
//! aggregate returns early on an error, any futures which are still pending
//! are dropped together with it. Spawned tasks whose handles are dropped keep
//! running on their runtime, and whatever they produce is discarded.
pub use self::all::{all, All};

pub(crate) mod all;
