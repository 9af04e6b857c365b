//! The orthogonal range search.

use tinyvec::TinyVec;

use crate::kdtree::index::ROOT;
use crate::kdtree::KDTree;
use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::rect::Rectangle;

/// Lazy iterator over the points of a [`KDTree`] that lie inside a [`Rectangle`].
///
/// Created by [`KDTree::range_iter`]. The search is a depth-first pre-order walk that skips the
/// left subtree of a node when the rectangle lies entirely at or above the node on its splitting
/// axis, and the right subtree when the rectangle lies entirely below it.
#[derive(Debug, Clone)]
pub struct RangeIter<'a, N> {
    tree: &'a KDTree<N>,
    rect: Rectangle<N>,
    /// Pending `(node, axis)` pairs.
    stack: TinyVec<[(usize, usize); 33]>,
}

impl<'a, N: IndexableNum> RangeIter<'a, N> {
    pub(crate) fn new(tree: &'a KDTree<N>, rect: Rectangle<N>) -> Self {
        let mut stack = TinyVec::new();
        if !tree.is_empty() {
            stack.push((ROOT, 0));
        }
        Self { tree, rect, stack }
    }
}

impl<'a, N: IndexableNum> Iterator for RangeIter<'a, N> {
    type Item = &'a Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, axis)) = self.stack.pop() {
            let node = &self.tree.nodes[id];
            let split = node.location.coord(axis);

            // queue the halves that can intersect the query
            // Note: these are pushed in backwards order to what gets popped
            if self.rect.upper().coord(axis) >= split {
                if let Some(right) = node.right {
                    self.stack.push((right, 1 - axis));
                }
            }
            if self.rect.lower().coord(axis) <= split {
                if let Some(left) = node.left {
                    self.stack.push((left, 1 - axis));
                }
            }

            if self.rect.contains(&node.location) {
                return Some(&node.location);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tree.len()))
    }
}

impl<N: IndexableNum> std::iter::FusedIterator for RangeIter<'_, N> {}
