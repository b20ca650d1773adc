use std::collections::BTreeSet;

use crate::Op;

/// Generates the same set of properties for each tree flavour. Both expose the
/// same inherent API so the bodies are shared.
macro_rules! tree_properties {
    ($name:ident, $flavour:ident) => {
        mod $name {
            use super::*;

            type Tree<K> = ordered_tree::$flavour::Tree<K>;

            /// Applies a set of operations to a tree and a `BTreeSet`.
            /// This way we can ensure that after a random smattering of inserts
            /// and deletes we have the same set of keys in both.
            fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
                for op in ops {
                    match op {
                        Op::Insert(k) => {
                            assert_eq!(bst.insert(*k), set.insert(*k));
                        }
                        Op::Delete(k) => {
                            assert_eq!(bst.delete(k), set.take(k));
                        }
                    }
                }
            }

            quickcheck::quickcheck! {
                fn matches_btreeset(ops: Vec<Op<i8>>) -> bool {
                    let mut tree = Tree::new();
                    let mut set = BTreeSet::new();

                    do_ops(&ops, &mut tree, &mut set);
                    tree.validate().is_ok()
                        && tree.len() == set.len()
                        && tree.traverse_in_order() == set.iter().collect::<Vec<_>>()
                }
            }

            quickcheck::quickcheck! {
                fn traversal_is_strictly_ascending(xs: Vec<i16>) -> bool {
                    let tree: Tree<_> = xs.into_iter().collect();
                    let keys = tree.traverse_in_order();

                    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys.len() == tree.len()
                }
            }

            quickcheck::quickcheck! {
                fn insert_then_search_then_delete(xs: Vec<i8>, x: i8) -> bool {
                    let mut tree: Tree<_> = xs.into_iter().collect();
                    tree.insert(x);
                    let found = tree.search(&x).map(|n| *n.key()) == Some(x);

                    tree.delete(&x);
                    found && tree.search(&x).is_none()
                }
            }

            quickcheck::quickcheck! {
                fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
                    let tree: Tree<_> = xs.iter().copied().collect();
                    let added: BTreeSet<_> = xs.into_iter().collect();

                    nots.iter()
                        .filter(|x| !added.contains(*x))
                        .all(|x| tree.search(x).is_none())
                }
            }

            quickcheck::quickcheck! {
                fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
                    let mut tree: Tree<_> = xs.iter().copied().collect();
                    for delete in &deletes {
                        tree.delete(delete);
                    }

                    deletes.iter().all(|x| tree.search(x).is_none())
                        && xs
                            .iter()
                            .filter(|x| !deletes.contains(*x))
                            .all(|x| tree.contains(x))
                        && tree.validate().is_ok()
                }
            }
        }
    };
}

tree_properties!(recursive_tree, recursive);
tree_properties!(iterative_tree, iterative);
