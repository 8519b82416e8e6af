//! Cursor-navigated binary search trees without parent pointers.
//!
//! Nodes in these trees know their children but not their parent. All
//! navigation and mutation goes through a [`Cursor`]/[`CursorMut`] that
//! records, outside the nodes, the trail of ancestors it descended
//! through: exactly the state needed to walk back up, detach a subtree
//! from its parent slot, or repoint that slot during a rotation.
//!
//! Two trees are built on that model:
//!
//! - [`BinaryTree`]: a plain binary tree with free-form cursor editing
//!   and eight iterative traversal orders ([`TraversalOrder`]).
//! - [`AvlTree`]: a self-balancing ordered set. Insert, remove and find
//!   run in O(log n); after every edit the engine climbs the cursor trail
//!   back to the root, refreshing cached heights and applying the four
//!   classic rotation cases where the balance factor hits ±2.
//!
//! # Example
//!
//! ```
//! use trailtree::{AvlTree, TraversalOrder};
//!
//! let mut tree = AvlTree::new();
//! for n in [1, 2, 3, 4, 5] {
//!     tree.insert(n);
//! }
//!
//! // ascending inserts rebalance into a bushy shape
//! assert_eq!(tree.height(), 3);
//!
//! let mut level_order = Vec::new();
//! tree.traverse(TraversalOrder::BreadthLeftToRight, |n| level_order.push(*n));
//! assert_eq!(level_order, vec![2, 1, 4, 3, 5]);
//!
//! tree.remove(&1);
//! assert_eq!(tree.size(), 4);
//! assert!(tree.find(&1).is_null());
//! ```

mod avl;
mod cursor;
mod node;
mod parse;
mod print;
mod traverse;
mod tree;

pub use avl::AvlTree;
pub use cursor::{Cursor, CursorError, CursorMut};
pub use parse::{parse, ParseError};
pub use traverse::TraversalOrder;
pub use tree::BinaryTree;
