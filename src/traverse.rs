//! The traversal engine: eight visiting orders over a subtree.
//!
//! Every order is iterative. Depth is bounded by an explicit auxiliary
//! stack or queue, never by the host call stack, so degenerate trees
//! cannot overflow it.

use std::collections::VecDeque;

use crate::node::{Arena, Node};

/// The eight visiting orders.
///
/// Left-to-right and right-to-left variants are exact mirrors of each
/// other. The default is depth-first preorder, left to right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Level by level, children queued left before right.
    BreadthLeftToRight,
    /// Level by level, children queued right before left.
    BreadthRightToLeft,
    /// Node, then left subtree, then right subtree.
    #[default]
    PreorderLeftToRight,
    /// Node, then right subtree, then left subtree.
    PreorderRightToLeft,
    /// Left subtree, then node, then right subtree.
    InorderLeftToRight,
    /// Right subtree, then node, then left subtree.
    InorderRightToLeft,
    /// Left subtree, then right subtree, then node.
    PostorderLeftToRight,
    /// Right subtree, then left subtree, then node.
    PostorderRightToLeft,
}

/// Children of `node` as `(near, far)`, where `near` is the side the
/// order prefers to visit first.
fn children<T>(node: &Node<T>, mirrored: bool) -> (Option<u32>, Option<u32>) {
    if mirrored {
        (node.right, node.left)
    } else {
        (node.left, node.right)
    }
}

/// Runs `visit` over the subtree at `start` in the given order.
pub(crate) fn run<'a, T, F>(
    arena: &'a Arena<T>,
    start: Option<u32>,
    order: TraversalOrder,
    visit: &mut F,
) where
    F: FnMut(&'a T),
{
    let Some(start) = start else {
        return;
    };
    match order {
        TraversalOrder::BreadthLeftToRight => breadth(arena, start, false, visit),
        TraversalOrder::BreadthRightToLeft => breadth(arena, start, true, visit),
        TraversalOrder::PreorderLeftToRight => preorder(arena, start, false, visit),
        TraversalOrder::PreorderRightToLeft => preorder(arena, start, true, visit),
        TraversalOrder::InorderLeftToRight => inorder(arena, start, false, visit),
        TraversalOrder::InorderRightToLeft => inorder(arena, start, true, visit),
        TraversalOrder::PostorderLeftToRight => postorder(arena, start, false, visit),
        TraversalOrder::PostorderRightToLeft => postorder(arena, start, true, visit),
    }
}

fn breadth<'a, T, F>(arena: &'a Arena<T>, start: u32, mirrored: bool, visit: &mut F)
where
    F: FnMut(&'a T),
{
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(i) = queue.pop_front() {
        let node = arena.get(i);
        visit(&node.data);
        let (near, far) = children(node, mirrored);
        if let Some(c) = near {
            queue.push_back(c);
        }
        if let Some(c) = far {
            queue.push_back(c);
        }
    }
}

fn preorder<'a, T, F>(arena: &'a Arena<T>, start: u32, mirrored: bool, visit: &mut F)
where
    F: FnMut(&'a T),
{
    let mut stack = vec![start];
    while let Some(i) = stack.pop() {
        let node = arena.get(i);
        visit(&node.data);
        let (near, far) = children(node, mirrored);
        // far goes on first so near pops first
        if let Some(c) = far {
            stack.push(c);
        }
        if let Some(c) = near {
            stack.push(c);
        }
    }
}

fn inorder<'a, T, F>(arena: &'a Arena<T>, start: u32, mirrored: bool, visit: &mut F)
where
    F: FnMut(&'a T),
{
    let mut stack: Vec<u32> = Vec::new();
    let mut cur = Some(start);
    while cur.is_some() || !stack.is_empty() {
        match cur {
            // descend along the preferred spine
            Some(i) => {
                stack.push(i);
                cur = children(arena.get(i), mirrored).0;
            }
            None => {
                let i = stack.pop().expect("stack is non-empty");
                let node = arena.get(i);
                visit(&node.data);
                cur = children(node, mirrored).1;
            }
        }
    }
}

fn postorder<'a, T, F>(arena: &'a Arena<T>, start: u32, mirrored: bool, visit: &mut F)
where
    F: FnMut(&'a T),
{
    let mut stack: Vec<u32> = Vec::new();
    let mut cur = Some(start);
    // With no parent pointers, re-reaching a node on the stack cannot tell
    // "children pending" from "children done"; the last emitted node
    // disambiguates.
    let mut last: Option<u32> = None;
    while cur.is_some() || !stack.is_empty() {
        match cur {
            Some(i) => {
                stack.push(i);
                cur = children(arena.get(i), mirrored).0;
            }
            None => {
                let top = *stack.last().expect("stack is non-empty");
                let far = children(arena.get(top), mirrored).1;
                if far.is_some() && last != far {
                    cur = far;
                } else {
                    visit(&arena.get(top).data);
                    last = stack.pop();
                }
            }
        }
    }
}
