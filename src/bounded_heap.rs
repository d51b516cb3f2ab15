//! Fixed-capacity binary max-heap keyed by squared distance to a target.
//!
//! The heap keeps the `capacity` closest points among everything offered
//! to it. It has two phases:
//!
//! - **Filling**: fewer than `capacity` points are held. Every offer is
//!   appended to the next free slot and sifted up.
//! - **Full**: the root holds the farthest of the kept points. An offer
//!   strictly closer than the root overwrites it and is sifted down; any
//!   other offer is discarded.
//!
//! Once full the heap never shrinks back. Slots are laid out as an
//! implicit binary tree: the children of slot `i` are `2i + 1` and `2i + 2`.

use std::num::NonZeroUsize;

use log::trace;

use crate::error::{HeapError, Result};
use crate::point::{Point, ScoredPoint};

/// What [`BoundedMaxHeap::offer`] did with a point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Offer {
    /// The heap was still filling and the point took the next free slot
    Inserted,
    /// The heap was full and the point evicted the farthest kept point
    Replaced,
    /// The heap was full and the point was no closer than the farthest kept point
    Rejected,
}

/// Bounded max-heap holding the `capacity` points closest to a target.
///
/// The target is fixed at construction and every offered point is scored
/// against it once.
///
/// # Examples
/// ```
/// use kclosest::{BoundedMaxHeap, Offer, Point};
///
/// let mut heap = BoundedMaxHeap::new(2, Point::new(0, 0)).unwrap();
/// assert_eq!(heap.offer(Point::new(3, 0)), Offer::Inserted);
/// assert_eq!(heap.offer(Point::new(1, 0)), Offer::Inserted);
/// assert_eq!(heap.offer(Point::new(2, 0)), Offer::Replaced);
/// assert_eq!(heap.offer(Point::new(5, 5)), Offer::Rejected);
///
/// // The root is always the farthest of the kept points
/// assert_eq!(heap.peek_max().map(|s| s.distance()), Some(4));
/// ```
#[derive(Clone, Debug)]
pub struct BoundedMaxHeap {
    /// Maximum number of points kept
    capacity: usize,
    /// Reference point all distances are measured from
    target: Point,
    /// Live entries in heap order; `slots.len()` is the current size
    slots: Vec<ScoredPoint>,
}

impl BoundedMaxHeap {
    /// Creates an empty heap keeping at most `capacity` points closest to `target`.
    ///
    /// Storage for all `capacity` slots is reserved up front and never grows.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, target: Point) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(HeapError::InvalidCapacity { capacity })?;
        Ok(Self::with_capacity(capacity, target))
    }

    /// Creates an empty heap from a capacity already known to be non-zero
    pub fn with_capacity(capacity: NonZeroUsize, target: Point) -> Self {
        Self {
            capacity: capacity.get(),
            target,
            slots: Vec::with_capacity(capacity.get()),
        }
    }

    /// Offers a point to the heap.
    ///
    /// While filling, the point is always inserted. Once full, it replaces
    /// the root only if it is strictly closer than the root, so on a tie
    /// the earlier offered point is kept.
    pub fn offer(&mut self, point: Point) -> Offer {
        let candidate = ScoredPoint::new(point, self.target);

        if self.slots.len() < self.capacity {
            self.slots.push(candidate);
            self.sift_up(self.slots.len() - 1);
            return Offer::Inserted;
        }

        let root = &mut self.slots[0];
        if candidate.distance() < root.distance() {
            trace!(
                "evict {} (d={}) for {} (d={})",
                root.point(),
                root.distance(),
                candidate.point(),
                candidate.distance()
            );
            *root = candidate;
            self.sift_down();
            Offer::Replaced
        } else {
            Offer::Rejected
        }
    }

    /// Offers every point from `points`, in iteration order
    pub fn offer_all<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for point in points {
            let _ = self.offer(point);
        }
    }

    /// Live entries in heap array order, not sorted by distance
    #[inline]
    pub fn contents(&self) -> &[ScoredPoint] {
        &self.slots
    }

    /// Farthest kept point (the root), if any
    #[inline]
    pub fn peek_max(&self) -> Option<&ScoredPoint> {
        self.slots.first()
    }

    /// Consumes the heap and returns the kept points in heap order
    pub fn into_points(self) -> Vec<Point> {
        self.slots.into_iter().map(|s| s.point()).collect()
    }

    /// Number of points currently held
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether no point has been inserted yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of points the heap keeps
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether the heap has left the filling phase
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// The reference point distances are measured from
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    // --- Private helpers ---

    /// A slot is a leaf when its left child lies past the last live slot
    #[inline]
    pub(crate) fn is_leaf(&self, index: usize) -> bool {
        left_child(index) >= self.slots.len()
    }

    /// Index of the child with the larger distance. Ties go to the right child.
    pub(crate) fn max_child(&self, index: usize) -> usize {
        assert!(
            !self.is_leaf(index),
            "cannot get max child of leaf slot {index} (size {})",
            self.slots.len()
        );
        let left = left_child(index);
        let right = right_child(index);
        if right >= self.slots.len() || self.slots[left].distance() > self.slots[right].distance() {
            left
        } else {
            right
        }
    }

    /// Moves the entry at `index` towards the root until its parent is not closer
    fn sift_up(&mut self, mut index: usize) {
        while index != 0 {
            let up = parent(index);
            if self.slots[index].distance() <= self.slots[up].distance() {
                break;
            }
            self.slots.swap(index, up);
            index = up;
        }
    }

    /// Moves the root towards the leaves until it is not closer than its larger child
    fn sift_down(&mut self) {
        let mut index = 0;
        while !self.is_leaf(index) {
            let child = self.max_child(index);
            if self.slots[index].distance() >= self.slots[child].distance() {
                break;
            }
            self.slots.swap(index, child);
            index = child;
        }
    }

    /// Builds a heap from raw slots without restoring heap order
    #[cfg(test)]
    pub(crate) fn from_slots(capacity: usize, target: Point, slots: Vec<ScoredPoint>) -> Self {
        Self { capacity, target, slots }
    }
}

#[inline]
pub(crate) const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub(crate) const fn right_child(index: usize) -> usize {
    2 * index + 2
}

#[inline]
pub(crate) const fn parent(index: usize) -> usize {
    (index - 1) / 2
}
