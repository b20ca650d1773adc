use ordered_tree::{iterative, recursive, Node};

use crate::Op;

/// Pre-order listing of a subtree where every missing child is a `None`. Two
/// trees are shaped the same exactly when their listings are equal.
fn shape<K: Copy>(root: Option<&Node<K>>) -> Vec<Option<K>> {
    let mut listing = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            Some(n) => {
                listing.push(Some(*n.key()));
                stack.push(n.right());
                stack.push(n.left());
            }
            None => listing.push(None),
        }
    }
    listing
}

quickcheck::quickcheck! {
    fn flavours_build_identical_shapes(ops: Vec<Op<i8>>) -> bool {
        let mut rec = recursive::Tree::new();
        let mut iter = iterative::Tree::new();

        ops.iter().all(|op| {
            let same_result = match *op {
                Op::Insert(k) => rec.insert(k) == iter.insert(k),
                Op::Delete(k) => rec.delete(&k) == iter.delete(&k),
            };
            same_result && shape(rec.root()) == shape(iter.root())
        })
    }
}

#[test]
fn successor_promotion_keeps_the_target_node_in_place() {
    let keys = [50, 30, 70, 20, 40, 60, 80, 65];
    let mut rec: recursive::Tree<_> = keys.into_iter().collect();
    let mut iter: iterative::Tree<_> = keys.into_iter().collect();

    assert_eq!(rec.delete(&50), Some(50));
    assert_eq!(iter.delete(&50), Some(50));

    // 60 is promoted into the root and its right child 65 takes its slot.
    let expected = vec![
        Some(60),
        Some(30),
        Some(20),
        None,
        None,
        Some(40),
        None,
        None,
        Some(70),
        Some(65),
        None,
        None,
        Some(80),
        None,
        None,
    ];
    assert_eq!(shape(rec.root()), expected);
    assert_eq!(shape(iter.root()), expected);
}
