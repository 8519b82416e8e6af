//! Self-balancing ordered tree.
//!
//! [`AvlTree`] keeps a dynamic set of totally-ordered payloads with
//! logarithmic insert, remove and lookup. Every mutation is a cursor
//! descent to the affected position, a local edit, then a climb back to
//! the root fixing cached heights and rotating where the balance factor
//! has reached ±2. Nodes carry no parent pointer; the climb and the
//! parent-slot surgery both run off the cursor's recorded trail.
//!
//! The tree hands out only read-only [`Cursor`]s, so callers cannot make
//! structural edits that would break the balance or ordering invariants.

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::{Cursor, CursorMut};
use crate::node::{Arena, Node};
use crate::print;
use crate::traverse::TraversalOrder;
use crate::tree::BinaryTree;

pub struct AvlTree<T: Ord> {
    tree: BinaryTree<T>,
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }

    /// Number of live nodes.
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Height of the whole tree, `0` when empty.
    pub fn height(&self) -> u32 {
        self.tree.height()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Inserts `data`. Inserting a payload that is already present is a
    /// silent no-op; the tree never holds duplicates.
    pub fn insert(&mut self, data: T) {
        AvlCursor::new(&mut self.tree).insert(data);
    }

    /// Removes `data` if present; removing an absent payload is a no-op.
    pub fn remove(&mut self, data: &T) {
        AvlCursor::new(&mut self.tree).remove(data);
    }

    /// Read-only cursor positioned at `data`, or at the empty slot where
    /// it would live. Never fails; check [`Cursor::is_null`] for "not
    /// found".
    pub fn find(&self, data: &T) -> Cursor<'_, T> {
        let mut cursor = self.tree.cursor();
        while let Ok(cur) = cursor.data() {
            match data.cmp(cur) {
                Ordering::Equal => break,
                Ordering::Less => cursor.goto_left().expect("current is present"),
                Ordering::Greater => cursor.goto_right().expect("current is present"),
            }
        }
        cursor
    }

    pub fn contains(&self, data: &T) -> bool {
        !self.find(data).is_null()
    }

    /// Visits every payload from the root in the given order.
    pub fn traverse<'a, F>(&'a self, order: TraversalOrder, visit: F)
    where
        F: FnMut(&'a T),
    {
        self.tree.traverse(order, visit);
    }

    /// Checks the ordering invariant, the cached heights, and the AVL
    /// balance bound at every node.
    pub fn assert_valid(&self) -> Result<(), String> {
        fn check<T>(arena: &Arena<T>, idx: u32) -> Result<u32, String> {
            let node = arena.get(idx);
            let lh = node.left.map(|l| check(arena, l)).transpose()?.unwrap_or(0);
            let rh = node.right.map(|r| check(arena, r)).transpose()?.unwrap_or(0);
            let height = 1 + lh.max(rh);
            if node.height != height {
                return Err(format!(
                    "cached height {} does not match computed height {height}",
                    node.height
                ));
            }
            let diff = lh as i32 - rh as i32;
            if !(-1..=1).contains(&diff) {
                return Err(format!("balance factor {diff} out of bounds"));
            }
            Ok(height)
        }

        if let Some(root) = self.tree.root {
            check(&self.tree.arena, root)?;
        }

        let mut keys: Vec<&T> = Vec::with_capacity(self.size());
        self.traverse(TraversalOrder::InorderLeftToRight, |k| keys.push(k));
        if keys.len() != self.size() {
            return Err(format!(
                "size {} does not match visited node count {}",
                self.size(),
                keys.len()
            ));
        }
        if keys.windows(2).any(|w| w[0] >= w[1]) {
            return Err("in-order sequence is not strictly ascending".to_string());
        }
        Ok(())
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print::render(f, &self.tree.arena, self.tree.root, "AvlTree")
    }
}

/// The writable cursor specialized for AVL editing. Never exposed;
/// [`AvlTree::insert`] and [`AvlTree::remove`] each build one, run, and
/// drop it.
struct AvlCursor<'a, T: Ord> {
    c: CursorMut<'a, T>,
}

impl<'a, T: Ord> AvlCursor<'a, T> {
    fn new(tree: &'a mut BinaryTree<T>) -> Self {
        Self {
            c: CursorMut::new(tree),
        }
    }

    fn node(&self, idx: u32) -> &Node<T> {
        self.c.tree().arena.get(idx)
    }

    fn diff(&self, idx: u32) -> i32 {
        self.c.tree().arena.diff(idx)
    }

    fn fix_height(&mut self, idx: u32) {
        self.c.tree_mut().arena.fix_height(idx);
    }

    /// Comparison descent from the current position; stops on the match
    /// or on the empty slot where the payload would live.
    fn find(&mut self, data: &T) {
        while let Some(idx) = self.c.current_index() {
            match data.cmp(&self.node(idx).data) {
                Ordering::Equal => return,
                Ordering::Less => self.c.goto_left().expect("current is present"),
                Ordering::Greater => self.c.goto_right().expect("current is present"),
            }
        }
    }

    fn insert(&mut self, data: T) {
        self.find(&data);
        if !self.c.is_null() {
            return;
        }
        self.c.set_node(data);
        self.balance();
    }

    fn remove(&mut self, data: &T) {
        self.find(data);
        if self.c.is_null() {
            return;
        }
        self.hoist_and_remove();
        self.balance();
    }

    /// The deletion policy at the found node.
    ///
    /// With no left child the node is either a leaf (plain removal) or
    /// has a single right child, which under the AVL bound must be a leaf
    /// whose payload can be hoisted up. With a left child, the in-order
    /// predecessor (the rightmost node of the left subtree) is hoisted
    /// into the found node's payload and removed by the same two cases
    /// (a rightmost node never has a right child). Ends by fixing the
    /// parent's height so `balance` starts from a consistent level.
    fn hoist_and_remove(&mut self) {
        if !self.c.has_left() {
            if !self.c.has_right() {
                self.c.remove_node().expect("current is present");
            } else {
                // single right child: hoist the leaf payload, drop the leaf
                self.c.goto_right().expect("current is present");
                let leaf_data = self.c.take_leaf();
                self.c.goto_parent().expect("descended from the parent");
                let idx = self.c.current_index().expect("current is present");
                let arena = &mut self.c.tree_mut().arena;
                arena.get_mut(idx).data = leaf_data;
                arena.fix_height(idx);
            }
        } else {
            let target = self.c.current_index().expect("current is present");
            // rightmost of the left subtree; every payload there is
            // smaller than the target's, so no comparisons are needed
            self.c.goto_left().expect("current is present");
            while self.c.has_right() {
                self.c.goto_right().expect("current is present");
            }
            if self.c.has_left() {
                // the predecessor's payload moves up to the target and
                // its left leaf's payload moves into the predecessor
                self.c.goto_left().expect("predecessor is present");
                let leaf_data = self.c.take_leaf();
                self.c.goto_parent().expect("descended from the predecessor");
                let pred = self.c.current_index().expect("predecessor is present");
                let arena = &mut self.c.tree_mut().arena;
                let pred_data = std::mem::replace(&mut arena.get_mut(pred).data, leaf_data);
                arena.get_mut(target).data = pred_data;
                arena.fix_height(pred);
            } else {
                // the predecessor is a leaf
                let pred_data = self.c.take_leaf();
                self.c.tree_mut().arena.get_mut(target).data = pred_data;
            }
        }
        if !self.c.is_root() {
            self.c.goto_parent().expect("not at root");
            let idx = self.c.current_index().expect("parent is present");
            self.fix_height(idx);
        }
    }

    /// Climbs from the current position to the root, refreshing heights
    /// and rotating wherever the balance factor has reached ±2. Every
    /// ancestor is examined; a deletion can make more than one of them
    /// rotate on the way up.
    fn balance(&mut self) {
        loop {
            if self.c.is_null() {
                if self.c.is_root() {
                    return;
                }
                self.c.goto_parent().expect("not at root");
            }
            let idx = self.c.current_index().expect("current is present");
            let diff = self.diff(idx);
            if diff == 2 {
                // left-heavy; the double rotation is only for an
                // inner-heavy child, a balanced child takes the single
                let left = self.node(idx).left.expect("left-heavy node has a left child");
                if self.diff(left) == -1 {
                    self.rotate_left_right();
                } else {
                    self.rotate_right();
                }
            } else if diff == -2 {
                // right-heavy mirror
                let right = self
                    .node(idx)
                    .right
                    .expect("right-heavy node has a right child");
                if self.diff(right) == 1 {
                    self.rotate_right_left();
                } else {
                    self.rotate_left();
                }
            } else {
                self.fix_height(idx);
            }
            if self.c.is_root() {
                return;
            }
            self.c.goto_parent().expect("not at root");
        }
    }

    /// Single right rotation: the left child is promoted over the current
    /// node, whose new left subtree is the child's former right subtree.
    fn rotate_right(&mut self) {
        let n = self.c.current_index().expect("rotation pivot is present");
        let l = self.node(n).left.expect("left child exists");
        let lr = self.node(l).right;
        self.c.tree_mut().arena.get_mut(n).left = lr;
        self.fix_height(n);
        self.c.tree_mut().arena.get_mut(l).right = Some(n);
        self.fix_height(l);
        self.c.replace_subtree_root(l);
    }

    /// Mirror of [`rotate_right`](Self::rotate_right).
    fn rotate_left(&mut self) {
        let n = self.c.current_index().expect("rotation pivot is present");
        let r = self.node(n).right.expect("right child exists");
        let rl = self.node(r).left;
        self.c.tree_mut().arena.get_mut(n).right = rl;
        self.fix_height(n);
        self.c.tree_mut().arena.get_mut(r).left = Some(n);
        self.fix_height(r);
        self.c.replace_subtree_root(r);
    }

    /// Left-right double rotation: the left child's right child is
    /// promoted over both, splitting its subtrees between them.
    fn rotate_left_right(&mut self) {
        let n = self.c.current_index().expect("rotation pivot is present");
        let l = self.node(n).left.expect("left child exists");
        let g = self.node(l).right.expect("grandchild exists");
        let gl = self.node(g).left;
        let gr = self.node(g).right;
        self.c.tree_mut().arena.get_mut(l).right = gl;
        self.fix_height(l);
        self.c.tree_mut().arena.get_mut(n).left = gr;
        self.fix_height(n);
        let grand = self.c.tree_mut().arena.get_mut(g);
        grand.left = Some(l);
        grand.right = Some(n);
        self.fix_height(g);
        self.c.replace_subtree_root(g);
    }

    /// Mirror of [`rotate_left_right`](Self::rotate_left_right).
    fn rotate_right_left(&mut self) {
        let n = self.c.current_index().expect("rotation pivot is present");
        let r = self.node(n).right.expect("right child exists");
        let g = self.node(r).left.expect("grandchild exists");
        let gl = self.node(g).left;
        let gr = self.node(g).right;
        self.c.tree_mut().arena.get_mut(r).left = gr;
        self.fix_height(r);
        self.c.tree_mut().arena.get_mut(n).right = gl;
        self.fix_height(n);
        let grand = self.c.tree_mut().arena.get_mut(g);
        grand.right = Some(r);
        grand.left = Some(n);
        self.fix_height(g);
        self.c.replace_subtree_root(g);
    }
}
