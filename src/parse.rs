//! Parenthesized-text tree fixtures.
//!
//! Grammar, with one optional outer pair of parentheses around the whole
//! input and whitespace free between tokens:
//!
//! ```text
//! tree  := INT [ child [ child ] ]
//! child := '(' tree ')' | "null"
//! ```
//!
//! The first child is the left subtree, the second the right; the bare
//! word `null` (case-insensitive) marks an absent left child when a right
//! one follows. `8 (9 (5)) (1)` is the tree rooted at 8 with left child 9
//! (which has left child 5) and right child 1; `4 null (7)` is 4 with
//! only a right child.
//!
//! The parser drives a [`CursorMut`](crate::CursorMut) (descend on `(`,
//! create on a number, ascend on `)`), so it doubles as an exerciser of
//! the cursor contract. Cached heights are leaf defaults; call
//! [`recompute_heights`](BinaryTree::recompute_heights) if they matter.

use thiserror::Error;

use crate::tree::BinaryTree;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("number not allowed at position {pos}")]
    UnexpectedNumber { pos: usize },
    #[error("invalid integer at position {pos}")]
    InvalidNumber { pos: usize },
    #[error("unexpected word at position {pos}, expected \"null\"")]
    UnexpectedWord { pos: usize },
    #[error("unbalanced parenthesis at position {pos}")]
    Unbalanced { pos: usize },
}

// Parser states, one per open node:
// 0 - slot still empty, 1 - payload set, 2 - left child done, 3 - both done.
const EMPTY: u8 = 0;
const HAS_DATA: u8 = 1;
const HAS_LEFT: u8 = 2;
const HAS_RIGHT: u8 = 3;

/// Parses a parenthesized tree description.
///
/// Blank input yields the empty tree.
pub fn parse(input: &str) -> Result<BinaryTree<i64>, ParseError> {
    let mut input = input.trim();
    if input.starts_with('(') && input.ends_with(')') {
        input = &input[1..input.len() - 1];
    }

    let mut tree = BinaryTree::new();
    let mut cursor = tree.cursor_mut();
    let mut states: Vec<u8> = vec![EMPTY];

    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_whitespace() {
            i += 1;
        } else if c == '(' {
            match states.last().copied() {
                Some(HAS_DATA) => cursor.goto_left().expect("payload was set"),
                Some(HAS_LEFT) => cursor.goto_right().expect("payload was set"),
                _ => return Err(ParseError::UnexpectedChar { ch: c, pos: i }),
            }
            states.push(EMPTY);
            i += 1;
        } else if c == ')' {
            states.pop();
            cursor
                .goto_parent()
                .map_err(|_| ParseError::Unbalanced { pos: i })?;
            match states.pop() {
                Some(HAS_DATA) => states.push(HAS_LEFT),
                Some(HAS_LEFT) => states.push(HAS_RIGHT),
                _ => return Err(ParseError::Unbalanced { pos: i }),
            }
            i += 1;
        } else if c.is_ascii_digit() || c == '-' || c == '+' {
            if states.last().copied() != Some(EMPTY) {
                return Err(ParseError::UnexpectedNumber { pos: i });
            }
            let mut j = i + 1;
            while j < bytes.len() && (bytes[j] as char).is_ascii_digit() {
                j += 1;
            }
            let n: i64 = input[i..j]
                .parse()
                .map_err(|_| ParseError::InvalidNumber { pos: i })?;
            cursor.set_node(n);
            states.pop();
            states.push(HAS_DATA);
            i = j;
        } else if c.is_ascii_alphabetic() {
            let mut j = i + 1;
            while j < bytes.len() && (bytes[j] as char).is_ascii_alphabetic() {
                j += 1;
            }
            if !input[i..j].eq_ignore_ascii_case("null") {
                return Err(ParseError::UnexpectedWord { pos: i });
            }
            match states.pop() {
                Some(HAS_DATA) => states.push(HAS_LEFT),
                Some(HAS_LEFT) => states.push(HAS_RIGHT),
                _ => return Err(ParseError::UnexpectedWord { pos: i }),
            }
            i = j;
        } else {
            return Err(ParseError::UnexpectedChar { ch: c, pos: i });
        }
    }

    if states.len() != 1 {
        return Err(ParseError::Unbalanced { pos: input.len() });
    }

    drop(cursor);
    Ok(tree)
}
