#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod naive;
mod point;
mod rect;
mod r#type;

pub use error::{KDIndexError, Result};
pub use kdtree::KDTree;
pub use naive::naive_range;
pub use point::Point;
pub use r#type::IndexableNum;
pub use rect::Rectangle;

#[cfg(test)]
pub(crate) mod test;
