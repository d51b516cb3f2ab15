//! Integer points and their squared distance to a target.

use std::fmt;

/// A point on the integer cartesian plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Creates a point at `(x, y)`
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Squared Euclidean distance between two points.
///
/// The square root is never taken: the result is exact and orders points
/// the same way as the true distance. Coordinate deltas are widened to 64
/// bits and their squares summed in 128 bits, so no pair of `i32` points
/// can overflow.
///
/// # Examples
/// ```
/// use kclosest::{Point, squared_distance};
///
/// let d = squared_distance(Point::new(1, 3), Point::new(1, 2));
/// assert_eq!(d, 1);
/// ```
#[inline]
pub fn squared_distance(a: Point, b: Point) -> u128 {
    let dx = u128::from((i64::from(a.x) - i64::from(b.x)).unsigned_abs());
    let dy = u128::from((i64::from(a.y) - i64::from(b.y)).unsigned_abs());
    dx * dx + dy * dy
}

/// A point paired with its squared distance from a fixed target.
///
/// The distance is computed once, when the point is scored, and never
/// recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredPoint {
    point: Point,
    distance: u128,
}

impl ScoredPoint {
    /// Scores `point` against `target`
    #[inline]
    pub fn new(point: Point, target: Point) -> Self {
        Self {
            point,
            distance: squared_distance(point, target),
        }
    }

    /// The scored point
    #[inline]
    pub const fn point(&self) -> Point {
        self.point
    }

    /// Squared distance from the target the point was scored against
    #[inline]
    pub const fn distance(&self) -> u128 {
        self.distance
    }
}

/// Scores every point against `target`, in input order, without any
/// filtering.
///
/// Costs a full pass and `O(n)` memory. Use [`crate::find_k_closest`] to
/// select only the closest points.
pub fn score_all(points: &[Point], target: Point) -> Vec<ScoredPoint> {
    points
        .iter()
        .map(|&point| ScoredPoint::new(point, target))
        .collect()
}
