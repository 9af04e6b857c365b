use geo_traits::CoordTrait;

use crate::r#type::IndexableNum;

/// An immutable two-dimensional point.
///
/// Equality and ordering are derived field-wise, so points sort lexicographically on `(x, y)`.
/// `Eq`, `Ord` and `Hash` are available whenever the coordinate type provides them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<N> {
    x: N,
    y: N,
}

impl<N: IndexableNum> Point<N> {
    /// Create a new point.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// The coordinate along `axis`: 0 for x, 1 for y.
    ///
    /// Any other axis panics.
    #[inline]
    pub fn coord(&self, axis: usize) -> N {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid axis {}", axis),
        }
    }
}

impl<N: IndexableNum> From<(N, N)> for Point<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> From<[N; 2]> for Point<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> From<Point<N>> for (N, N) {
    fn from(point: Point<N>) -> Self {
        (point.x, point.y)
    }
}

impl<N: IndexableNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        self.coord(n)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orders_lexicographically() {
        let mut points = vec![
            Point::new(2, 1),
            Point::new(1, 5),
            Point::new(2, 0),
            Point::new(1, 5),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![
                Point::new(1, 5),
                Point::new(1, 5),
                Point::new(2, 0),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn nan_is_unequal_to_itself() {
        let p = Point::new(f64::NAN, 1.0);
        assert_ne!(p, p);
        assert_eq!(p.partial_cmp(&p), None);
    }

    #[test]
    fn coord_trait_matches_accessors() {
        let p = Point::new(3.5, -1.0);
        assert_eq!(CoordTrait::x(&p), 3.5);
        assert_eq!(CoordTrait::y(&p), -1.0);
        assert_eq!(p.nth_or_panic(0), p.coord(0));
        assert_eq!(p.nth_or_panic(1), p.coord(1));
        assert_eq!(<(f64, f64)>::from(p), (3.5, -1.0));
    }
}
