use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::test::sorted;
use crate::{naive_range, KDTree, Point, Rectangle};

fn grid(size: i32) -> Vec<Point<i32>> {
    (0..size)
        .flat_map(|x| (0..size).map(move |y| Point::new(x, y)))
        .collect()
}

fn window() -> Rectangle<i32> {
    Rectangle::new(Point::new(500, 500), Point::new(504, 504))
}

fn window_points() -> Vec<Point<i32>> {
    sorted(grid(1000).into_iter().filter(|p| window().contains(p)).collect())
}

#[test]
fn finds_window_in_shuffled_grid() {
    let mut points = grid(1000);
    points.shuffle(&mut StdRng::seed_from_u64(1000));

    let tree: KDTree<i32> = points.iter().copied().collect();
    assert_eq!(tree.len(), 1_000_000);

    let result = sorted(tree.range(&window()));
    assert_eq!(result.len(), 25);
    assert_eq!(result, window_points());
    assert_eq!(result, sorted(naive_range(&points, &window())));
}

#[test]
fn row_major_grid_is_searchable() {
    // row-major order degrades the tree: every x = 0 point lands on one chain
    let points = grid(200);
    let tree: KDTree<i32> = points.iter().copied().collect();
    assert!(tree.height() >= 200);

    let rect = Rectangle::new(Point::new(100, 100), Point::new(104, 104));
    let result = sorted(tree.range(&rect));
    assert_eq!(result.len(), 25);
    assert_eq!(result, sorted(naive_range(&points, &rect)));
}

#[test]
#[ignore = "row-major insertion of the full grid takes on the order of 10^9 steps"]
fn finds_window_in_row_major_grid() {
    let points = grid(1000);
    let tree: KDTree<i32> = points.iter().copied().collect();
    assert_eq!(sorted(tree.range(&window())), window_points());
}
