use std::fmt::Debug;

use num_traits::{Bounded, Num};

/// A trait for types that can be used as point coordinates.
///
/// Unlike a sealed coordinate trait, this one is intentionally open: it is blanket-implemented for
/// every `Num + Bounded + PartialOrd + Copy + Debug` type, so primitive integers and floats work
/// alongside downstream numeric types. Nothing is cast or shared across threads by the tree, so
/// `NumCast`, `Send` and `Sync` are not required. `KDTree<N>` is still `Send`/`Sync` whenever `N`
/// is.
///
/// Floats are accepted as-is, including NaN: a NaN coordinate never compares as "less than", so
/// it is always routed to the right of a split and is never contained in any rectangle.
///
/// The [`Bounded`] limits are used as the outer edge of the region covered by the root node
/// during [traversal][crate::kdtree::NodeRef].
pub trait IndexableNum: Num + Bounded + PartialOrd + Copy + Debug {}

impl<T> IndexableNum for T where T: Num + Bounded + PartialOrd + Copy + Debug {}

#[cfg(test)]
mod test {
    use crate::{KDTree, Point};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn tree_is_send_and_sync_for_primitive_coords() {
        assert_send_sync::<KDTree<f64>>();
        assert_send_sync::<KDTree<i64>>();
    }

    #[test]
    fn accepts_every_primitive_numeric_type() {
        fn len_of<N: super::IndexableNum>(x: N, y: N) -> usize {
            let tree: KDTree<N> = [Point::new(x, y), Point::new(y, x)].into_iter().collect();
            tree.len()
        }
        assert_eq!(len_of(1u8, 2), 2);
        assert_eq!(len_of(-1i16, 2), 2);
        assert_eq!(len_of(1u64, 2), 2);
        assert_eq!(len_of(1.5f32, 2.), 2);
    }
}
