//! K-closest point selection driven by [`BoundedMaxHeap`].

use std::num::NonZeroUsize;

use log::debug;

use crate::bounded_heap::BoundedMaxHeap;
use crate::point::Point;

/// Returns the `k` points closest to `target`.
///
/// When `points` has `k` or fewer elements it is returned unchanged, in its
/// original order. Otherwise exactly `k` points are returned in heap order
/// (not sorted by distance). Among points at equal distance, the earlier
/// ones in `points` are preferred.
///
/// Runs in `O(n log k)` time and `O(k)` extra memory.
///
/// # Examples
/// ```
/// use kclosest::{Point, find_k_closest};
///
/// let points = [
///     Point::new(0, -2),
///     Point::new(-2, 4),
///     Point::new(1, 3),
///     Point::new(-1, -3),
///     Point::new(5, 2),
/// ];
/// let closest = find_k_closest(&points, Point::new(1, 2), 1);
/// assert_eq!(closest, vec![Point::new(1, 3)]);
/// ```
pub fn find_k_closest(points: &[Point], target: Point, k: usize) -> Vec<Point> {
    let mut results = Vec::with_capacity(k.min(points.len()));
    find_k_closest_into(points, target, k, &mut results);
    results
}

/// Same selection as [`find_k_closest`], appending to `results`.
///
/// Results are appended to the output vector (not cleared first), so one
/// buffer can be reused across queries.
///
/// # Examples
/// ```
/// use kclosest::{Point, find_k_closest_into};
///
/// let points = [Point::new(5, 5), Point::new(0, 1), Point::new(9, 0)];
/// let mut results = Vec::new();
/// find_k_closest_into(&points, Point::new(0, 0), 1, &mut results);
/// assert_eq!(results, vec![Point::new(0, 1)]);
/// ```
pub fn find_k_closest_into(points: &[Point], target: Point, k: usize, results: &mut Vec<Point>) {
    if points.len() <= k {
        debug!("passthrough: {} points, k={}", points.len(), k);
        results.extend_from_slice(points);
        return;
    }
    let Some(capacity) = NonZeroUsize::new(k) else {
        debug!("k=0: empty selection from {} points", points.len());
        return;
    };

    let mut heap = BoundedMaxHeap::with_capacity(capacity, target);
    heap.offer_all(points.iter().copied());
    debug!(
        "selected {} of {} points around {}, farthest d={:?}",
        heap.len(),
        points.len(),
        target,
        heap.peek_max().map(|s| s.distance())
    );

    results.extend(heap.contents().iter().map(|s| s.point()));
}
