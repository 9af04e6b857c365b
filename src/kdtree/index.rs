use geo_traits::RectTrait;
use tinyvec::TinyVec;
use tracing::{debug, trace};

use crate::error::{KDIndexError, Result};
use crate::kdtree::range::RangeIter;
use crate::kdtree::traversal::NodeRef;
use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::rect::Rectangle;

/// Arena slot of the root node. The root is created by the first insertion and never replaced.
pub(crate) const ROOT: usize = 0;

/// A vertex of the tree.
///
/// Children are arena indices. Every index other than [`ROOT`] is referenced by exactly one
/// parent link.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node<N> {
    pub(crate) location: Point<N>,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<N> Node<N> {
    fn leaf(location: Point<N>) -> Self {
        Self {
            location,
            left: None,
            right: None,
        }
    }
}

/// A two-dimensional k-d tree built by incremental point insertion.
///
/// Nodes split on x at even depths and on y at odd depths. A point strictly less than a node on
/// that node's axis lives in its left subtree; everything else, ties included, lives in the right
/// subtree. The tree is never rebalanced, so its shape, though not the answer to any query,
/// depends on insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N> {
    pub(crate) nodes: Vec<Node<N>>,
}

impl<N: IndexableNum> KDTree<N> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty tree with room for `capacity` points before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build a tree from an interleaved `[x0, y0, x1, y1, ...]` coordinate buffer.
    ///
    /// Points are inserted in buffer order.
    pub fn try_from_interleaved(coords: &[N]) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(KDIndexError::OddCoordinateCount(coords.len()));
        }

        let mut tree = Self::with_capacity(coords.len() / 2);
        tree.insert(coords.chunks_exact(2).map(|xy| Point::new(xy[0], xy[1])));
        debug!(num_items = tree.len(), "built tree from interleaved coords");
        Ok(tree)
    }

    /// The number of points inserted, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no point has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert each point in order.
    pub fn insert<I: IntoIterator<Item = Point<N>>>(&mut self, points: I) {
        let before = self.len();
        for point in points {
            self.insert_point(point);
        }
        trace!(
            inserted = self.len() - before,
            num_items = self.len(),
            "inserted points"
        );
    }

    /// Insert a single point, attaching it as a new leaf.
    pub fn insert_point(&mut self, point: Point<N>) {
        let id = self.nodes.len();
        if id == ROOT {
            self.nodes.push(Node::leaf(point));
            return;
        }

        let mut current = ROOT;
        let mut axis = 0;
        loop {
            let node = &mut self.nodes[current];
            let child = if point.coord(axis) < node.location.coord(axis) {
                &mut node.left
            } else {
                &mut node.right
            };

            match *child {
                Some(next) => {
                    current = next;
                    axis = 1 - axis;
                }
                None => {
                    *child = Some(id);
                    break;
                }
            }
        }

        self.nodes.push(Node::leaf(point));
    }

    /// Search the tree for points within a given rectangle, boundary included.
    ///
    /// Points are returned in pre-order traversal order, which is not sorted. Normalize (sort, or
    /// compare as a multiset) before comparing against another source.
    pub fn range(&self, rect: &Rectangle<N>) -> Vec<Point<N>> {
        self.range_iter(rect).copied().collect()
    }

    /// Lazily search the tree for points within a given rectangle.
    ///
    /// Yields the same points in the same order as [`range`][Self::range].
    pub fn range_iter(&self, rect: &Rectangle<N>) -> RangeIter<'_, N> {
        RangeIter::new(self, *rect)
    }

    /// Search the tree for points within any [`RectTrait`].
    pub fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Vec<Point<N>> {
        self.range(&Rectangle::from_rect(rect))
    }

    /// Iterate over every stored point in pre-order.
    pub fn iter(&self) -> Iter<'_, N> {
        let mut stack = TinyVec::new();
        if !self.is_empty() {
            stack.push(ROOT);
        }
        Iter { tree: self, stack }
    }

    /// The number of levels in the tree. Zero for an empty tree.
    pub fn height(&self) -> usize {
        let mut stack: TinyVec<[(usize, usize); 33]> = TinyVec::new();
        if !self.is_empty() {
            stack.push((ROOT, 1));
        }

        let mut height = 0;
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, level + 1));
            }
        }
        height
    }

    /// Access the root node for manual traversal.
    pub fn root(&self) -> Option<NodeRef<'_, N>> {
        if self.is_empty() {
            None
        } else {
            Some(NodeRef::from_root(self))
        }
    }
}

impl<N: IndexableNum> Default for KDTree<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: IndexableNum> Extend<Point<N>> for KDTree<N> {
    fn extend<I: IntoIterator<Item = Point<N>>>(&mut self, points: I) {
        self.insert(points);
    }
}

impl<N: IndexableNum> FromIterator<Point<N>> for KDTree<N> {
    fn from_iter<I: IntoIterator<Item = Point<N>>>(points: I) -> Self {
        let mut tree = Self::new();
        tree.insert(points);
        tree
    }
}

impl<'a, N: IndexableNum> IntoIterator for &'a KDTree<N> {
    type Item = &'a Point<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over every point in a [`KDTree`].
#[derive(Debug, Clone)]
pub struct Iter<'a, N> {
    tree: &'a KDTree<N>,
    stack: TinyVec<[usize; 33]>,
}

impl<'a, N: IndexableNum> Iterator for Iter<'a, N> {
    type Item = &'a Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        // Note: pushed right first so that left is popped first
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some(&node.location)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.tree.len()))
    }
}
