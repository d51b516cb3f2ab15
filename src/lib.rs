//! # kclosest - K closest points with a bounded max-heap
//!
//! A Rust library that selects the `k` points closest to a target from a
//! fixed set of integer 2D points, without sorting the whole set.
//!
//! ## Features
//!
//! - **Bounded Max-Heap**: Keeps only the `k` best candidates seen so far, `O(n log k)` overall
//! - **Exact Distances**: Squared Euclidean distance in integer arithmetic, no floating point
//! - **Deterministic Ties**: Earlier offered points win ties against the farthest kept point
//! - **Simple API**: One call for the common case, the heap itself for streaming input
//!
//! ## Quick Start
//!
//! ```rust
//! use kclosest::prelude::*;
//!
//! let points = [
//!     Point::new(0, -2),  // d = 17
//!     Point::new(-2, 4),  // d = 13
//!     Point::new(1, 3),   // d = 1
//!     Point::new(-1, -3), // d = 29
//!     Point::new(5, 2),   // d = 16
//! ];
//! let target = Point::new(1, 2);
//!
//! let closest = find_k_closest(&points, target, 2);
//! assert_eq!(closest.len(), 2);
//! assert!(closest.contains(&Point::new(1, 3)));
//! assert!(closest.contains(&Point::new(-2, 4)));
//!
//! // Asking for at least as many points as there are returns the input unchanged
//! assert_eq!(find_k_closest(&points, target, 10), points.to_vec());
//! ```
//!
//! ## How It Works
//!
//! [`BoundedMaxHeap`] stores up to `k` scored points in a flat array laid out
//! as a binary max-heap on distance, so the farthest kept point is always at
//! the root. Until the heap is full every point is inserted. After that, a new
//! point is only kept if it is strictly closer than the root, in which case
//! it overwrites the root and sifts down.
//!
//! The returned points are in heap order. Sort them by distance separately if
//! an ordered result is needed.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: one
//! `debug` record per selection and one `trace` record per eviction. Install
//! any logger (for example `env_logger`) to see them.

pub mod bounded_heap;
pub mod closest;
pub mod error;
pub mod point;
pub mod prelude;

pub use bounded_heap::{BoundedMaxHeap, Offer};
pub use closest::{find_k_closest, find_k_closest_into};
pub use error::{HeapError, Result};
pub use point::{Point, ScoredPoint, score_all, squared_distance};

mod integration_test;
