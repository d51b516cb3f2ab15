//! Find the points closest to a target.
use kclosest::prelude::*;

fn main() {
    env_logger::init();

    let points = [
        Point::new(0, -2),
        Point::new(-2, 4),
        Point::new(1, 3),
        Point::new(-1, -3),
        Point::new(5, 2),
    ];
    let target = Point::new(1, 2);

    for k in [1, 3] {
        let closest = find_k_closest(&points, target, k);
        let shown: Vec<String> = closest.iter().map(ToString::to_string).collect();
        println!("{} closest to {}: [{}]", k, target, shown.join(", "));
    }
}
