//! Plain (unbalanced) binary tree.
//!
//! [`BinaryTree`] owns the node arena and hands out cursors; all access to
//! nodes goes through a cursor or a traversal, never through node
//! references. The tree makes no ordering or balance promises of its own
//! (that is the AVL layer's job), but it does keep `size` exact under
//! every structural edit.

use std::fmt;

use crate::cursor::{Cursor, CursorMut};
use crate::node::Arena;
use crate::print;
use crate::traverse::{self, TraversalOrder};

pub struct BinaryTree<T> {
    pub(crate) root: Option<u32>,
    pub(crate) size: usize,
    pub(crate) arena: Arena<T>,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
            arena: Arena::new(),
        }
    }

    /// A tree holding a single root node.
    pub fn with_root(data: T) -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc(data);
        Self {
            root: Some(root),
            size: 1,
            arena,
        }
    }

    /// Number of live nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Cached height of the tree, `0` when empty.
    ///
    /// Exact when heights have been maintained (the AVL engine does) or
    /// recomputed via [`recompute_heights`](Self::recompute_heights).
    pub fn height(&self) -> u32 {
        self.arena.height(self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.size = 0;
    }

    /// A read-only cursor at the root position.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// A mutating cursor at the root position.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Visits every payload from the root in the given order.
    pub fn traverse<'a, F>(&'a self, order: TraversalOrder, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        traverse::run(&self.arena, self.root, order, &mut visit);
    }

    /// Refreshes every cached height, children before parents.
    ///
    /// Trees built through raw cursor edits or the fixture parser carry
    /// leaf-default heights; call this before relying on them.
    pub fn recompute_heights(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        let mut order = Vec::with_capacity(self.size);
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            order.push(i);
            let node = self.arena.get(i);
            if let Some(l) = node.left {
                stack.push(l);
            }
            if let Some(r) = node.right {
                stack.push(r);
            }
        }
        // reversed preorder puts every child before its parent
        for &i in order.iter().rev() {
            self.arena.fix_height(i);
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print::render(f, &self.arena, self.root, "BinaryTree")
    }
}
