#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;
    use crate::{find_k_closest_into, score_all};
    use rand::{Rng, SeedableRng};

    fn sample_points() -> Vec<Point> {
        [(0, -2), (-2, 4), (1, 3), (-1, -3), (5, 2)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    fn sorted_distances(points: &[Point], target: Point) -> Vec<u128> {
        let mut d: Vec<u128> = score_all(points, target).iter().map(|s| s.distance()).collect();
        d.sort_unstable();
        d
    }

    #[test]
    fn test_sample_distances() {
        let d: Vec<u128> = score_all(&sample_points(), Point::new(1, 2))
            .iter()
            .map(|s| s.distance())
            .collect();
        assert_eq!(d, vec![17, 13, 1, 29, 16]);
    }

    #[test]
    fn test_single_closest() {
        let closest = find_k_closest(&sample_points(), Point::new(1, 2), 1);
        assert_eq!(closest, vec![Point::new(1, 3)]);
    }

    #[test]
    fn test_k_equal_to_len_is_passthrough() {
        let points = sample_points();
        assert_eq!(find_k_closest(&points, Point::new(1, 2), 5), points);
    }

    #[test]
    fn test_k_larger_than_len_is_passthrough() {
        let points = sample_points();
        assert_eq!(find_k_closest(&points, Point::new(1, 2), 10), points);
    }

    #[test]
    fn test_k_zero() {
        assert!(find_k_closest(&sample_points(), Point::new(1, 2), 0).is_empty());
        assert!(find_k_closest(&[], Point::new(1, 2), 0).is_empty());
    }

    #[test]
    fn test_empty_points() {
        assert!(find_k_closest(&[], Point::new(0, 0), 3).is_empty());
    }

    #[test]
    fn test_three_closest() {
        let target = Point::new(1, 2);
        let closest = find_k_closest(&sample_points(), target, 3);
        assert_eq!(closest.len(), 3);
        // 1, 13 and 16: (1,3), (-2,4), (5,2)
        for p in [Point::new(1, 3), Point::new(-2, 4), Point::new(5, 2)] {
            assert!(closest.contains(&p), "{p} missing from {closest:?}");
        }
    }

    #[test]
    fn test_into_appends_without_clearing() {
        let mut results = vec![Point::new(99, 99)];
        find_k_closest_into(&sample_points(), Point::new(1, 2), 1, &mut results);
        assert_eq!(results, vec![Point::new(99, 99), Point::new(1, 3)]);

        find_k_closest_into(&[Point::new(7, 7)], Point::new(0, 0), 4, &mut results);
        assert_eq!(results.len(), 3, "passthrough should append too");
        assert_eq!(results[2], Point::new(7, 7));
    }

    #[test]
    fn test_ties_prefer_earlier_points() {
        let points: Vec<Point> = [(1, 0), (0, 1), (-1, 0), (0, -1), (5, 5)]
            .into_iter()
            .map(Point::from)
            .collect();
        let mut closest = find_k_closest(&points, Point::new(0, 0), 2);
        closest.sort_by_key(|p| (p.x, p.y));
        assert_eq!(closest, vec![Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn test_duplicate_points() {
        let points = vec![Point::new(2, 2); 6];
        let closest = find_k_closest(&points, Point::new(0, 0), 4);
        assert_eq!(closest, vec![Point::new(2, 2); 4]);
    }

    #[test]
    fn test_matches_brute_force() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);

        for _ in 0..50 {
            let n = rng.random_range(1..300);
            let points: Vec<Point> = (0..n)
                .map(|_| Point::new(rng.random_range(-1000..=1000), rng.random_range(-1000..=1000)))
                .collect();
            let target = Point::new(rng.random_range(-1000..=1000), rng.random_range(-1000..=1000));
            let k = rng.random_range(0..=n + 5);

            let closest = find_k_closest(&points, target, k);

            if n <= k {
                assert_eq!(closest, points, "n={n} k={k} should pass through");
                continue;
            }
            assert_eq!(closest.len(), k, "n={n} k={k}");
            for p in &closest {
                assert!(points.contains(p), "{p} was not in the input");
            }

            let mut expected = sorted_distances(&points, target);
            expected.truncate(k);
            assert_eq!(sorted_distances(&closest, target), expected, "n={n} k={k}");
        }
    }

    #[test]
    fn test_streaming_heap() {
        let mut heap = BoundedMaxHeap::new(2, Point::new(1, 2)).unwrap();
        heap.offer_all(sample_points());
        let mut kept: Vec<u128> = heap.contents().iter().map(ScoredPoint::distance).collect();
        kept.sort_unstable();
        assert_eq!(kept, vec![1, 13]);
        assert_eq!(heap.peek_max().map(ScoredPoint::point), Some(Point::new(-2, 4)));
    }

    #[test]
    fn test_invalid_capacity_message() {
        let err = BoundedMaxHeap::new(0, Point::new(0, 0)).unwrap_err();
        assert!(matches!(err, HeapError::InvalidCapacity { capacity: 0 }));
        assert_eq!(
            err.to_string(),
            "invalid heap capacity 0: capacity must be at least 1"
        );
    }
}
