//! An ordered map backed by a balance-factor AVL tree.
//!
//! [`AvlMap`] keeps its keys in sorted order, rebalancing itself after
//! every insertion and removal so that no operation ever costs more than
//! O(log n). Each node stores a single signed balance factor instead of a
//! subtree height, and the rebalancing walk stops as soon as a height
//! change is absorbed, keeping the fix-up work to a minimum.
//!
//! ```
//! use avlmap::AvlMap;
//!
//! let mut map = AvlMap::default();
//!
//! map.insert(42, "bananas");
//! map.insert(22, "platanos");
//! map.insert(25, "西瓜");
//!
//! assert_eq!(map.get(&42), Some(&"bananas"));
//! assert_eq!(map.remove(&22), Some("platanos"));
//!
//! // Iteration yields keys in ascending order, not insertion order.
//! let keys = map.iter().map(|(k, _v)| *k).collect::<Vec<_>>();
//! assert_eq!(keys, [25, 42]);
//! ```
//!
//! The crate also ships a small standalone helper for plain (non-search)
//! binary trees: [`has_equal_leaf_depth`] reports whether the paths on
//! either side of a [`BinaryNode`] root reach an equal depth.

mod depth;
mod entry;
mod iter;
mod map;
mod node;
#[cfg(test)]
mod test_utils;

pub use depth::*;
pub use entry::*;
pub use iter::OwnedIter;
pub use map::*;
