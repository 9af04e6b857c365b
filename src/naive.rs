use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::rect::Rectangle;

/// Brute-force range search: every point of `points` contained in `rect`, in input order.
///
/// This is the linear scan a [`KDTree`][crate::KDTree] replaces. It is useful as a reference
/// when validating or benchmarking tree queries.
pub fn naive_range<N: IndexableNum>(points: &[Point<N>], rect: &Rectangle<N>) -> Vec<Point<N>> {
    points.iter().filter(|p| rect.contains(p)).copied().collect()
}
