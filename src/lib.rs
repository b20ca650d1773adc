//! This crate exposes an ordered key store built on a plain, unbalanced
//! Binary Search Tree (BST). It comes in two flavours with identical
//! behaviour: [`recursive::Tree`] and [`iterative::Tree`].
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Both inequalities are strict, so a key is stored at most once. Inserting a
//! key that is already present does nothing.
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). These trees do
//! not rebalance themselves, so the shape is decided entirely by insertion
//! order. Inserting keys in sorted order produces a "degenerate" tree where
//! every node has at most one child and the height equals the number of keys.
//!
//! ## Choosing a flavour
//!
//! [`recursive::Tree`] implements every operation by recursing over child
//! slots. It is the most direct expression of the algorithms but uses stack
//! space proportional to the height of the tree.
//!
//! [`iterative::Tree`] walks the tree with loops and explicit stacks instead,
//! so it is safe to use on degenerate trees of any size.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::iterative::Tree;
//!
//! let mut tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
//!
//! assert_eq!(tree.traverse_in_order(), [&2, &3, &4, &5, &6, &7, &8]);
//! assert_eq!(tree.delete(&5), Some(5));
//! assert!(tree.search(&5).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iterative;
mod node;
pub mod recursive;
#[cfg(test)]
mod test;

pub use error::InvariantError;
pub use node::{Iter, Node};
