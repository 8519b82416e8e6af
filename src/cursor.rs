//! Tree navigation without parent pointers.
//!
//! A cursor is a movable position over a [`BinaryTree`]. Because nodes do
//! not store a back-reference, the cursor keeps the path it took from the
//! root (a stack of ancestor indices plus the direction taken at each
//! hop) and consumes that trail to ascend or to repoint a parent's child
//! slot.
//!
//! Two cursor types share one navigation core:
//!
//! - [`Cursor`] shared-borrows the tree: navigation and reads only. The
//!   structural-mutation methods are simply not on this type, so a
//!   read-only position cannot be used to edit the tree.
//! - [`CursorMut`] exclusively borrows the tree and adds the mutation
//!   contract: [`set_node`](CursorMut::set_node),
//!   [`set_data`](CursorMut::set_data),
//!   [`remove_node`](CursorMut::remove_node) and friends.
//!
//! A cursor whose current position is absent (`is_null`) is still a valid
//! position: it names the slot where a node *could* be created, and
//! [`CursorMut::set_node`] will create it there.

use thiserror::Error;

use crate::node::{Arena, Node};
use crate::traverse::{self, TraversalOrder};
use crate::tree::BinaryTree;

/// Contract violations raised by cursor operations.
///
/// These are fail-fast programmer errors, not recoverable conditions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// An operation that needs a present node ran while the cursor sat on
    /// an empty position.
    #[error("cursor is not positioned on a node")]
    NullCursor,
    /// `goto_parent` was called with the cursor already at the root.
    #[error("cursor is already at the root")]
    RootBoundary,
}

/// Direction taken from an ancestor while descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dir {
    Left,
    Right,
}

/// The navigation state itself: current position plus the trail of
/// ancestors and directions. Holds indices only, never borrows, so both
/// cursor types can wrap it around their own flavor of tree borrow.
#[derive(Clone, Debug)]
struct Trail {
    ancestors: Vec<u32>,
    dirs: Vec<Dir>,
    current: Option<u32>,
}

impl Trail {
    fn at_root(root: Option<u32>) -> Self {
        Self {
            ancestors: Vec::new(),
            dirs: Vec::new(),
            current: root,
        }
    }

    fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    fn descend<T>(&mut self, arena: &Arena<T>, dir: Dir) -> Result<(), CursorError> {
        let cur = self.current.ok_or(CursorError::NullCursor)?;
        let node = arena.get(cur);
        let child = match dir {
            Dir::Left => node.left,
            Dir::Right => node.right,
        };
        self.ancestors.push(cur);
        self.dirs.push(dir);
        self.current = child;
        Ok(())
    }

    fn ascend(&mut self) -> Result<(), CursorError> {
        if self.is_root() {
            return Err(CursorError::RootBoundary);
        }
        self.current = self.ancestors.pop();
        self.dirs.pop();
        Ok(())
    }

    fn rewind(&mut self, root: Option<u32>) {
        self.ancestors.clear();
        self.dirs.clear();
        self.current = root;
    }

    /// The recorded parent slot of the current position, `None` at root.
    fn parent_slot(&self) -> Option<(u32, Dir)> {
        match (self.ancestors.last(), self.dirs.last()) {
            (Some(&p), Some(&d)) => Some((p, d)),
            _ => None,
        }
    }
}

/// Read-only cursor over a shared-borrowed tree.
pub struct Cursor<'a, T> {
    tree: &'a BinaryTree<T>,
    trail: Trail,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            trail: Trail::at_root(tree.root),
            tree,
        }
    }

    /// True while no ancestor has been recorded, i.e. the cursor sits at
    /// the root position (which may itself be empty).
    pub fn is_root(&self) -> bool {
        self.trail.is_root()
    }

    /// True when the current position holds no node.
    pub fn is_null(&self) -> bool {
        self.trail.current.is_none()
    }

    pub fn has_left(&self) -> bool {
        self.trail
            .current
            .is_some_and(|i| self.tree.arena.get(i).left.is_some())
    }

    pub fn has_right(&self) -> bool {
        self.trail
            .current
            .is_some_and(|i| self.tree.arena.get(i).right.is_some())
    }

    /// Payload at the current position.
    pub fn data(&self) -> Result<&'a T, CursorError> {
        let idx = self.trail.current.ok_or(CursorError::NullCursor)?;
        Ok(&self.tree.arena.get(idx).data)
    }

    /// Records the current node on the trail and moves to its left child,
    /// which may be an empty slot.
    pub fn goto_left(&mut self) -> Result<(), CursorError> {
        self.trail.descend(&self.tree.arena, Dir::Left)
    }

    pub fn goto_right(&mut self) -> Result<(), CursorError> {
        self.trail.descend(&self.tree.arena, Dir::Right)
    }

    /// Pops one hop off the trail.
    pub fn goto_parent(&mut self) -> Result<(), CursorError> {
        self.trail.ascend()
    }

    /// Returns to the root and forgets the trail.
    pub fn goto_root(&mut self) {
        self.trail.rewind(self.tree.root);
    }

    /// Visits the subtree under the current position in the given order.
    /// An empty position visits nothing.
    pub fn traverse<F>(&self, order: TraversalOrder, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        traverse::run(&self.tree.arena, self.trail.current, order, &mut visit);
    }
}

/// Mutating cursor over an exclusively-borrowed tree.
///
/// Everything [`Cursor`] can do, plus structural edits at the current
/// position. Tree size is kept exact through every edit.
pub struct CursorMut<'a, T> {
    tree: &'a mut BinaryTree<T>,
    trail: Trail,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(tree: &'a mut BinaryTree<T>) -> Self {
        Self {
            trail: Trail::at_root(tree.root),
            tree,
        }
    }

    pub fn is_root(&self) -> bool {
        self.trail.is_root()
    }

    pub fn is_null(&self) -> bool {
        self.trail.current.is_none()
    }

    pub fn has_left(&self) -> bool {
        self.trail
            .current
            .is_some_and(|i| self.tree.arena.get(i).left.is_some())
    }

    pub fn has_right(&self) -> bool {
        self.trail
            .current
            .is_some_and(|i| self.tree.arena.get(i).right.is_some())
    }

    pub fn data(&self) -> Result<&T, CursorError> {
        let idx = self.trail.current.ok_or(CursorError::NullCursor)?;
        Ok(&self.tree.arena.get(idx).data)
    }

    pub fn goto_left(&mut self) -> Result<(), CursorError> {
        self.trail.descend(&self.tree.arena, Dir::Left)
    }

    pub fn goto_right(&mut self) -> Result<(), CursorError> {
        self.trail.descend(&self.tree.arena, Dir::Right)
    }

    pub fn goto_parent(&mut self) -> Result<(), CursorError> {
        self.trail.ascend()
    }

    pub fn goto_root(&mut self) {
        self.trail.rewind(self.tree.root);
    }

    pub fn traverse<F>(&self, order: TraversalOrder, mut visit: F)
    where
        F: FnMut(&T),
    {
        traverse::run(&self.tree.arena, self.trail.current, order, &mut visit);
    }

    /// Creates or replaces the node at the current position.
    ///
    /// On an empty position a new node is created in the recorded slot
    /// (the root slot when no ancestor was recorded) and becomes current.
    /// On an occupied position the payload is overwritten and **both
    /// subtrees are pruned**; the node itself stays in place. Size is
    /// adjusted by the exact number of nodes created or discarded.
    pub fn set_node(&mut self, data: T) {
        match self.trail.current {
            None => {
                let idx = self.tree.arena.alloc(data);
                match self.trail.parent_slot() {
                    None => {
                        self.tree.root = Some(idx);
                        self.tree.size = 1;
                    }
                    Some((p, Dir::Left)) => {
                        self.tree.arena.get_mut(p).left = Some(idx);
                        self.tree.size += 1;
                    }
                    Some((p, Dir::Right)) => {
                        self.tree.arena.get_mut(p).right = Some(idx);
                        self.tree.size += 1;
                    }
                }
                self.trail.current = Some(idx);
            }
            Some(idx) => {
                let node = self.tree.arena.get_mut(idx);
                node.data = data;
                node.height = 1;
                let left = node.left.take();
                let right = node.right.take();
                let mut removed = 0;
                if let Some(l) = left {
                    removed += self.tree.arena.release_subtree(l);
                }
                if let Some(r) = right {
                    removed += self.tree.arena.release_subtree(r);
                }
                self.tree.size -= removed;
            }
        }
    }

    /// Replaces the payload only; no structural change.
    pub fn set_data(&mut self, data: T) -> Result<(), CursorError> {
        let idx = self.trail.current.ok_or(CursorError::NullCursor)?;
        self.tree.arena.get_mut(idx).data = data;
        Ok(())
    }

    /// Detaches the current node and its whole subtree. At the root this
    /// clears the tree. The current position becomes empty.
    pub fn remove_node(&mut self) -> Result<(), CursorError> {
        let idx = self.trail.current.ok_or(CursorError::NullCursor)?;
        match self.trail.parent_slot() {
            None => {
                self.tree.arena.clear();
                self.tree.root = None;
                self.tree.size = 0;
            }
            Some((p, dir)) => {
                match dir {
                    Dir::Left => self.tree.arena.get_mut(p).left = None,
                    Dir::Right => self.tree.arena.get_mut(p).right = None,
                }
                let removed = self.tree.arena.release_subtree(idx);
                self.tree.size -= removed;
            }
        }
        self.trail.current = None;
        Ok(())
    }

    /// Removes the left child's subtree and returns to this position.
    /// Fails with [`CursorError::NullCursor`] when there is no left child;
    /// the cursor does not move on failure.
    pub fn remove_left(&mut self) -> Result<(), CursorError> {
        if !self.has_left() {
            return Err(CursorError::NullCursor);
        }
        self.goto_left()?;
        self.remove_node()?;
        self.goto_parent()
    }

    /// Mirror of [`remove_left`](CursorMut::remove_left).
    pub fn remove_right(&mut self) -> Result<(), CursorError> {
        if !self.has_right() {
            return Err(CursorError::NullCursor);
        }
        self.goto_right()?;
        self.remove_node()?;
        self.goto_parent()
    }

    // --- crate-internal surface for the AVL engine ---

    pub(crate) fn current_index(&self) -> Option<u32> {
        self.trail.current
    }

    pub(crate) fn tree(&self) -> &BinaryTree<T> {
        self.tree
    }

    pub(crate) fn tree_mut(&mut self) -> &mut BinaryTree<T> {
        self.tree
    }

    /// Repoints the recorded parent slot (or the tree root) at `new` and
    /// moves the cursor there. Used after rotations, where the node now
    /// heading the subtree is not the one the trail descended into.
    pub(crate) fn replace_subtree_root(&mut self, new: u32) {
        match self.trail.parent_slot() {
            None => self.tree.root = Some(new),
            Some((p, Dir::Left)) => self.tree.arena.get_mut(p).left = Some(new),
            Some((p, Dir::Right)) => self.tree.arena.get_mut(p).right = Some(new),
        }
        self.trail.current = Some(new);
    }

    /// Detaches the current node, which must be a leaf, and hands its
    /// payload back. The current position becomes empty.
    pub(crate) fn take_leaf(&mut self) -> T {
        let idx = self.trail.current.expect("current is present");
        match self.trail.parent_slot() {
            None => {
                self.tree.root = None;
                self.tree.size = 0;
            }
            Some((p, Dir::Left)) => {
                self.tree.arena.get_mut(p).left = None;
                self.tree.size -= 1;
            }
            Some((p, Dir::Right)) => {
                self.tree.arena.get_mut(p).right = None;
                self.tree.size -= 1;
            }
        }
        self.trail.current = None;
        let node: Node<T> = self.tree.arena.release(idx);
        node.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::BinaryTree;

    #[test]
    fn empty_tree_cursor_is_null_root() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        let cursor = tree.cursor();
        assert!(cursor.is_root());
        assert!(cursor.is_null());
        assert!(!cursor.has_left());
        assert_eq!(cursor.data(), Err(CursorError::NullCursor));
    }

    #[test]
    fn goto_parent_at_root_is_a_boundary() {
        let mut tree = BinaryTree::with_root(7);
        let mut cursor = tree.cursor_mut();
        assert_eq!(cursor.goto_parent(), Err(CursorError::RootBoundary));
        cursor.goto_left().unwrap();
        assert!(cursor.is_null());
        cursor.goto_parent().unwrap();
        assert_eq!(cursor.data(), Ok(&7));
    }

    #[test]
    fn descending_into_an_empty_slot_then_creating() {
        let mut tree = BinaryTree::with_root(1);
        let mut cursor = tree.cursor_mut();
        cursor.goto_right().unwrap();
        assert!(cursor.is_null());
        cursor.set_node(2);
        assert!(!cursor.is_null());
        assert_eq!(cursor.data(), Ok(&2));
        assert_eq!(tree.size(), 2);
    }

    #[test]
    fn set_node_on_occupied_position_prunes_the_subtree() {
        let mut tree = BinaryTree::new();
        {
            let mut cursor = tree.cursor_mut();
            cursor.set_node(1);
            cursor.goto_left().unwrap();
            cursor.set_node(2);
            cursor.goto_left().unwrap();
            cursor.set_node(3);
            cursor.goto_root();
            cursor.goto_right().unwrap();
            cursor.set_node(4);
            cursor.goto_root();
        }
        assert_eq!(tree.size(), 4);
        let mut cursor = tree.cursor_mut();
        cursor.goto_left().unwrap();
        // overwrites 2 and discards its child 3
        cursor.set_node(20);
        assert_eq!(cursor.data(), Ok(&20));
        drop(cursor);
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn remove_node_at_root_clears_the_tree() {
        let mut tree = BinaryTree::new();
        let mut cursor = tree.cursor_mut();
        cursor.set_node(1);
        cursor.goto_left().unwrap();
        cursor.set_node(2);
        cursor.goto_root();
        cursor.remove_node().unwrap();
        assert!(cursor.is_null());
        assert!(cursor.is_root());
        drop(cursor);
        assert_eq!(tree.size(), 0);
    }

    #[test]
    fn remove_left_returns_to_the_same_position() {
        let mut tree = BinaryTree::new();
        let mut cursor = tree.cursor_mut();
        cursor.set_node(5);
        cursor.goto_left().unwrap();
        cursor.set_node(3);
        cursor.goto_parent().unwrap();
        cursor.remove_left().unwrap();
        assert_eq!(cursor.data(), Ok(&5));
        assert!(!cursor.has_left());
        // no right child to remove
        assert_eq!(cursor.remove_right(), Err(CursorError::NullCursor));
        assert_eq!(cursor.data(), Ok(&5));
    }
}
