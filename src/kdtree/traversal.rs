//! Utilities to traverse the KDTree structure.

use geo_traits::{
    Dimensions, GeometryTrait, GeometryType, RectTrait, UnimplementedGeometryCollection,
    UnimplementedLine, UnimplementedLineString, UnimplementedMultiLineString,
    UnimplementedMultiPoint, UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon,
    UnimplementedTriangle,
};

use crate::kdtree::index::{Node, ROOT};
use crate::kdtree::KDTree;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// A read-only handle onto one node of a [`KDTree`].
///
/// Besides the stored point, a handle tracks the region of the plane its subtree may occupy, as
/// implied by the splits of its ancestors. That region is exposed through [`RectTrait`]. Its
/// bounds are inclusive approximations: a left subtree holds points strictly below its parent's
/// split, but the region's upper edge is the split itself.
#[derive(Debug, Clone)]
pub struct NodeRef<'a, N> {
    /// The tree that this node is a reference onto
    tree: &'a KDTree<N>,

    id: usize,
    depth: usize,

    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<'a, N: IndexableNum> NodeRef<'a, N> {
    pub(crate) fn from_root(tree: &'a KDTree<N>) -> Self {
        Self {
            tree,
            id: ROOT,
            depth: 0,
            min_x: N::min_value(),
            min_y: N::min_value(),
            max_x: N::max_value(),
            max_y: N::max_value(),
        }
    }

    #[inline]
    fn node(&self) -> &'a Node<N> {
        &self.tree.nodes[self.id]
    }

    /// The point stored at this node.
    #[inline]
    pub fn location(&self) -> &'a Point<N> {
        &self.node().location
    }

    /// Distance from the root. The root has depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The axis that the children of this node are split over.
    /// 0 for x axis, 1 for y axis
    #[inline]
    pub fn axis(&self) -> usize {
        self.depth % 2
    }

    /// The child holding points strictly below this node on its axis, if any.
    pub fn left_child(&self) -> Option<NodeRef<'a, N>> {
        let id = self.node().left?;
        let split = self.location().coord(self.axis());

        let mut max_x = self.max_x;
        let mut max_y = self.max_y;
        if self.axis() == 0 {
            max_x = split;
        } else {
            max_y = split;
        };

        Some(Self {
            tree: self.tree,
            id,
            depth: self.depth + 1,
            min_x: self.min_x,
            min_y: self.min_y,
            max_x,
            max_y,
        })
    }

    /// The child holding points at or above this node on its axis, if any.
    pub fn right_child(&self) -> Option<NodeRef<'a, N>> {
        let id = self.node().right?;
        let split = self.location().coord(self.axis());

        let mut min_x = self.min_x;
        let mut min_y = self.min_y;
        if self.axis() == 0 {
            min_x = split;
        } else {
            min_y = split;
        };

        Some(Self {
            tree: self.tree,
            id,
            depth: self.depth + 1,
            min_x,
            min_y,
            max_x: self.max_x,
            max_y: self.max_y,
        })
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl<'t, N: IndexableNum> GeometryTrait for NodeRef<'t, N> {
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
        = NodeRef<'t, N>
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

impl<N: IndexableNum> RectTrait for NodeRef<'_, N> {
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.min_x, self.min_y)
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.max_x, self.max_y)
    }
}
