//! Cross-check range queries against rstar.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstar::{RTree, AABB};

use crate::test::{random_points, random_rect, sorted};
use crate::{KDTree, Point};

#[test]
fn agrees_with_rstar() {
    let points = random_points(21, 10_000, 500);
    let tree: KDTree<i32> = points.iter().copied().collect();
    let rtree = RTree::bulk_load(points.iter().map(|p| [p.x(), p.y()]).collect());

    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..100 {
        let rect = random_rect(&mut rng, 500);
        let lower = rect.lower();
        let upper = rect.upper();
        let aabb = AABB::from_corners([lower.x(), lower.y()], [upper.x(), upper.y()]);

        let expected: Vec<Point<i32>> = rtree
            .locate_in_envelope(&aabb)
            .map(|[x, y]| Point::new(*x, *y))
            .collect();
        assert_eq!(sorted(tree.range(&rect)), sorted(expected));
    }
}
