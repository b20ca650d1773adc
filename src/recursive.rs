//! A recursive BST. Every operation recurses from the root over the owned child
//! slots of each `Node`. Deletion returns the new root of each subtree to its
//! caller which stores it back in its own child slot, so nodes never need to
//! know about their parents.
//!
//! Recursion depth equals the height of the tree. For trees built from sorted
//! input prefer [`crate::iterative::Tree`].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1).map(|node| node.key()), Some(&1));
//!
//! // Inserting the same key again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a key returns it.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(tree.search(&1).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::InvariantError;
use crate::node::{self, Iter, Link, Node};

/// A plain (unbalanced) Binary Search Tree of keys whose operations are
/// implemented recursively.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key` unless an equal key is already stored. Returns whether a
    /// node was added. Inserting a duplicate leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(7);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.key(), &5);
    /// assert_eq!(root.left().map(|n| n.key()), Some(&3));
    /// assert_eq!(root.right().map(|n| n.key()), Some(&7));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = match self.root.as_deref_mut() {
            Some(root) => insert(root, key),
            None => {
                self.root = Some(Node::new_boxed(key));
                true
            }
        };

        if inserted {
            self.len += 1;
            trace!(len = self.len, "inserted key");
        } else {
            trace!("ignored duplicate key");
        }
        inserted
    }

    /// Finds the node holding `key`. If no node has the key, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7].into_iter().collect();
    ///
    /// assert!(tree.search(&5).is_some());
    /// assert!(tree.search(&10).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        search(self.root(), key)
    }

    /// Whether a node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Deletes the node holding `key` and returns the key. If the tree does not
    /// contain the key, nothing happens and `None` is returned.
    ///
    /// A node with two children keeps its place in the tree: it takes over the
    /// key of its in-order successor and the successor's node is removed
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.root().map(|n| n.key()), Some(&7));
    /// assert_eq!(tree.delete(&5), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let (root, deleted) = delete(self.root.take(), key);
        self.root = root;

        match deleted {
            Some(_) => {
                self.len -= 1;
                trace!(len = self.len, "deleted key");
            }
            None => trace!("key not found, nothing deleted"),
        }
        deleted
    }

    /// Returns the keys of the tree in ascending order. An empty tree gives an
    /// empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse_in_order(), [&2, &3, &4, &5, &6, &7, &8]);
    /// assert!(Tree::<i32>::new().traverse_in_order().is_empty());
    /// ```
    pub fn traverse_in_order(&self) -> Vec<&K> {
        self.root().map_or_else(Vec::new, Node::traverse_in_order)
    }

    /// Lazily iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty
    /// tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| root.leftmost().key())
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| root.rightmost().key())
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        node::dismantle(self.root.take());
        self.len = 0;
    }

    /// Checks that the keys are in strict BST order (which implies there are no
    /// duplicates) and that [`Tree::len`] matches the number of nodes.
    pub fn validate(&self) -> Result<(), InvariantError>
    where
        K: Ord,
    {
        node::validate(self.root(), self.len)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Descends from `node` to the empty child slot where `key` belongs and places
/// a new node there. Returns `false` if an equal key is found on the way.
fn insert<K>(node: &mut Node<K>, key: K) -> bool
where
    K: Ord,
{
    let inserted = match key.cmp(&node.key) {
        Ordering::Less => match node.left.as_deref_mut() {
            Some(left) => insert(left, key),
            None => {
                node.left = Some(Node::new_boxed(key));
                true
            }
        },
        Ordering::Equal => false,
        Ordering::Greater => match node.right.as_deref_mut() {
            Some(right) => insert(right, key),
            None => {
                node.right = Some(Node::new_boxed(key));
                true
            }
        },
    };

    debug_assert!(node.left().map_or(true, |left| left.key < node.key));
    debug_assert!(node.right().map_or(true, |right| right.key > node.key));
    inserted
}

fn search<'a, K>(node: Option<&'a Node<K>>, key: &K) -> Option<&'a Node<K>>
where
    K: Ord,
{
    let node = node?;
    match key.cmp(&node.key) {
        Ordering::Less => search(node.left(), key),
        Ordering::Equal => Some(node),
        Ordering::Greater => search(node.right(), key),
    }
}

/// Deletes `key` from the subtree owned by `link`. Returns the new root of the
/// subtree, which the caller must store back where `link` came from, along with
/// the deleted key.
fn delete<K>(link: Link<K>, key: &K) -> (Link<K>, Option<K>)
where
    K: Ord,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, deleted) = delete(node.left.take(), key);
            node.left = left;
            (Some(node), deleted)
        }
        Ordering::Greater => {
            let (right, deleted) = delete(node.right.take(), key);
            node.right = right;
            (Some(node), deleted)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // A missing child means the other one (possibly also missing) can
            // take this node's place.
            (None, right) => (right, Some(node.key)),
            (left, None) => (left, Some(node.key)),
            (Some(left), Some(right)) => {
                let (right, successor) = take_leftmost(right);
                trace!("promoted in-order successor");
                node.left = Some(left);
                node.right = right;
                let deleted = mem::replace(&mut node.key, successor);
                (Some(node), Some(deleted))
            }
        },
    }
}

/// Removes the leftmost node of the subtree rooted at `node`. That node has no
/// left child so its right child takes its place. Returns the remaining subtree
/// and the removed key.
fn take_leftmost<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        Some(left) => {
            let (left, key) = take_leftmost(left);
            node.left = left;
            (Some(node), key)
        }
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
    }
}
