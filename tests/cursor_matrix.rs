use trailtree::{BinaryTree, CursorError, TraversalOrder};

fn breadth(tree: &BinaryTree<i32>) -> Vec<i32> {
    let mut out = Vec::new();
    tree.traverse(TraversalOrder::BreadthLeftToRight, |n| out.push(*n));
    out
}

#[test]
fn freeform_build_edit_and_prune_matrix() {
    let mut tree = BinaryTree::new();
    {
        let mut cursor = tree.cursor_mut();
        assert!(cursor.is_root());
        assert!(cursor.is_null());

        cursor.set_node(2);
        cursor.goto_left().unwrap();
        cursor.set_node(3);
        cursor.goto_right().unwrap();
        cursor.set_node(4);
        cursor.goto_parent().unwrap();
        cursor.goto_left().unwrap();
        cursor.set_node(1);
        cursor.goto_parent().unwrap();
        cursor.goto_parent().unwrap();
        cursor.goto_right().unwrap();
        cursor.set_node(60);
        cursor.goto_right().unwrap();
        cursor.set_node(0);
        cursor.goto_right().unwrap();
        cursor.set_node(0);
        cursor.goto_parent().unwrap();
        // drops the node and the chain hanging off it
        cursor.remove_node().unwrap();
        cursor.goto_parent().unwrap();
        cursor.set_data(50).unwrap();
        cursor.goto_left().unwrap();
        cursor.set_node(990);
        cursor.goto_parent().unwrap();
        cursor.remove_left().unwrap();
    }

    assert_eq!(tree.size(), 5);
    assert_eq!(breadth(&tree), vec![2, 3, 50, 1, 4]);
}

#[test]
fn set_node_creates_or_prunes_matrix() {
    let mut tree = BinaryTree::new();
    let mut cursor = tree.cursor_mut();

    // create at the empty root slot
    cursor.set_node(10);
    cursor.goto_left().unwrap();
    cursor.set_node(5);
    cursor.goto_left().unwrap();
    cursor.set_node(2);
    cursor.goto_parent().unwrap();
    cursor.goto_parent().unwrap();
    cursor.goto_right().unwrap();
    cursor.set_node(15);
    drop(cursor);
    assert_eq!(tree.size(), 4);

    // overwrite the root: payload replaced, both subtrees pruned
    let mut cursor = tree.cursor_mut();
    cursor.set_node(99);
    assert_eq!(cursor.data(), Ok(&99));
    assert!(!cursor.has_left());
    assert!(!cursor.has_right());
    drop(cursor);
    assert_eq!(tree.size(), 1);
    assert_eq!(breadth(&tree), vec![99]);
}

#[test]
fn remove_node_detaches_whole_subtrees_matrix() {
    let mut tree = trailtree::parse("10 (5 (2) (7)) (15 (12))").unwrap();
    assert_eq!(tree.size(), 6);

    let mut cursor = tree.cursor_mut();
    cursor.goto_left().unwrap();
    cursor.remove_node().unwrap();
    assert!(cursor.is_null());
    cursor.goto_parent().unwrap();
    drop(cursor);

    assert_eq!(tree.size(), 3);
    let breadth: Vec<i64> = {
        let mut out = Vec::new();
        tree.traverse(TraversalOrder::BreadthLeftToRight, |n| out.push(*n));
        out
    };
    assert_eq!(breadth, vec![10, 15, 12]);
}

#[test]
fn cursor_errors_matrix() {
    let mut tree: BinaryTree<i32> = BinaryTree::new();
    {
        let mut cursor = tree.cursor_mut();
        assert_eq!(cursor.data(), Err(CursorError::NullCursor));
        assert_eq!(cursor.set_data(1), Err(CursorError::NullCursor));
        assert_eq!(cursor.remove_node(), Err(CursorError::NullCursor));
        assert_eq!(cursor.goto_left(), Err(CursorError::NullCursor));
        assert_eq!(cursor.goto_right(), Err(CursorError::NullCursor));
        assert_eq!(cursor.goto_parent(), Err(CursorError::RootBoundary));
    }

    let mut cursor = tree.cursor_mut();
    cursor.set_node(1);
    assert_eq!(cursor.remove_left(), Err(CursorError::NullCursor));
    assert_eq!(cursor.remove_right(), Err(CursorError::NullCursor));
    // failures leave the cursor in place
    assert_eq!(cursor.data(), Ok(&1));
    assert!(cursor.is_root());
}

#[test]
fn goto_root_forgets_the_trail_matrix() {
    let mut tree = trailtree::parse("1 (2 (4)) (3)").unwrap();
    let mut cursor = tree.cursor_mut();
    cursor.goto_left().unwrap();
    cursor.goto_left().unwrap();
    assert_eq!(cursor.data(), Ok(&4));
    cursor.goto_root();
    assert!(cursor.is_root());
    assert_eq!(cursor.data(), Ok(&1));
    assert_eq!(cursor.goto_parent(), Err(CursorError::RootBoundary));
}

#[test]
fn read_only_cursor_navigates_matrix() {
    let tree = trailtree::parse("1 (2) (3)").unwrap();
    let mut cursor = tree.cursor();
    assert_eq!(cursor.data(), Ok(&1));
    cursor.goto_right().unwrap();
    assert_eq!(cursor.data(), Ok(&3));
    assert!(!cursor.has_left());
    cursor.goto_left().unwrap();
    assert!(cursor.is_null());
    cursor.goto_root();

    // data borrows the tree, not the cursor, so reads outlive navigation
    let root_payload = cursor.data().unwrap();
    cursor.goto_left().unwrap();
    assert_eq!(*root_payload, 1);
}
