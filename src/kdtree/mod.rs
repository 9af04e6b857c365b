//! A dynamic, insertion-built 2-D K-D Tree.

#![warn(missing_docs)]

mod index;
mod range;
mod traversal;

pub use index::{Iter, KDTree};
pub use range::RangeIter;
pub use traversal::NodeRef;
