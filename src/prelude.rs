//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kclosest::prelude::*;
//! ```

pub use crate::{BoundedMaxHeap, HeapError, Offer, Point, ScoredPoint, find_k_closest};
