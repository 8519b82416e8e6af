//! Indented tree rendering.
//!
//! One node per line, children indented under their parent with `←` and
//! `→` marking the side. Backs the `Display` impls and makes test
//! failures readable.

use std::fmt;

use crate::node::Arena;

pub(crate) fn render<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    arena: &Arena<T>,
    root: Option<u32>,
    name: &str,
) -> fmt::Result {
    match root {
        None => write!(f, "{name} ∅"),
        Some(root) => {
            write!(f, "{name}")?;
            render_node(f, arena, root, "", "└─")
        }
    }
}

fn render_node<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    arena: &Arena<T>,
    idx: u32,
    tab: &str,
    side: &str,
) -> fmt::Result {
    let node = arena.get(idx);
    write!(f, "\n{tab}{side} {}", node.data)?;
    let deeper = format!("{tab}  ");
    if let Some(l) = node.left {
        render_node(f, arena, l, &deeper, "←")?;
    }
    if let Some(r) = node.right {
        render_node(f, arena, r, &deeper, "→")?;
    }
    Ok(())
}
