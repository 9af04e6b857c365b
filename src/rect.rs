use geo_traits::{
    CoordTrait, Dimensions, GeometryTrait, GeometryType, RectTrait, UnimplementedGeometryCollection,
    UnimplementedLine, UnimplementedLineString, UnimplementedMultiLineString,
    UnimplementedMultiPoint, UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon,
    UnimplementedTriangle,
};

use crate::error::{KDIndexError, Result};
use crate::point::Point;
use crate::r#type::IndexableNum;

/// An axis-aligned rectangle defined by its lower and upper corners.
///
/// Both bounds are inclusive. The corners are expected to satisfy `lower <= upper` on each axis,
/// but [`Rectangle::new`] does not check this: an inverted rectangle simply contains nothing on
/// the inverted axis. Use [`Rectangle::try_new`] to reject such input up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rectangle<N> {
    lower: Point<N>,
    upper: Point<N>,
}

impl<N: IndexableNum> Rectangle<N> {
    /// Create a new rectangle from its lower and upper corners.
    pub fn new(lower: Point<N>, upper: Point<N>) -> Self {
        Self { lower, upper }
    }

    /// Create a new rectangle, checking that `lower` does not exceed `upper` on either axis.
    ///
    /// NaN corners are rejected as well.
    pub fn try_new(lower: Point<N>, upper: Point<N>) -> Result<Self> {
        if lower.x() <= upper.x() && lower.y() <= upper.y() {
            Ok(Self::new(lower, upper))
        } else {
            Err(KDIndexError::InvalidRectangle)
        }
    }

    /// A degenerate rectangle covering exactly one point.
    pub fn from_point(point: Point<N>) -> Self {
        Self::new(point, point)
    }

    /// Copy any [`RectTrait`] into a [`Rectangle`].
    pub fn from_rect(rect: &impl RectTrait<T = N>) -> Self {
        let min = rect.min();
        let max = rect.max();
        Self::new(Point::new(min.x(), min.y()), Point::new(max.x(), max.y()))
    }

    /// The lower (minimum) corner.
    #[inline]
    pub fn lower(&self) -> Point<N> {
        self.lower
    }

    /// The upper (maximum) corner.
    #[inline]
    pub fn upper(&self) -> Point<N> {
        self.upper
    }

    /// Whether `point` lies inside this rectangle, boundary included.
    #[inline]
    pub fn contains(&self, point: &Point<N>) -> bool {
        self.lower.x() <= point.x()
            && point.x() <= self.upper.x()
            && self.lower.y() <= point.y()
            && point.y() <= self.upper.y()
    }
}

impl<N: IndexableNum> GeometryTrait for Rectangle<N> {
    type T = N;
    type PointType<'b>
        = UnimplementedPoint<N>
    where
        Self: 'b;
    type LineStringType<'b>
        = UnimplementedLineString<N>
    where
        Self: 'b;
    type PolygonType<'b>
        = UnimplementedPolygon<N>
    where
        Self: 'b;
    type MultiPointType<'b>
        = UnimplementedMultiPoint<N>
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = UnimplementedMultiLineString<N>
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = UnimplementedMultiPolygon<N>
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = UnimplementedGeometryCollection<N>
    where
        Self: 'b;
    type RectType<'b>
        = Rectangle<N>
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<N>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<N>
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Self::PointType<'_>,
        Self::LineStringType<'_>,
        Self::PolygonType<'_>,
        Self::MultiPointType<'_>,
        Self::MultiLineStringType<'_>,
        Self::MultiPolygonType<'_>,
        Self::GeometryCollectionType<'_>,
        Self::RectType<'_>,
        Self::TriangleType<'_>,
        Self::LineType<'_>,
    > {
        GeometryType::Rect(self)
    }
}

impl<N: IndexableNum> RectTrait for Rectangle<N> {
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        self.lower
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.upper
    }
}
