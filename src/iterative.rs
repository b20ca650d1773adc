//! A loop-based BST. It stores exactly the same shapes as
//! [`crate::recursive::Tree`] but never recurses: mutations walk a cursor over
//! the owned child slots and traversal, height and teardown use explicit
//! stacks. This makes it safe to use on degenerate trees (e.g. ones built from
//! sorted input) of any size.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::iterative::Tree;
//!
//! // Ascending insertion builds one long chain of right children.
//! let mut tree: Tree<_> = (0..10_000).collect();
//!
//! assert_eq!(tree.height(), 10_000);
//! assert_eq!(tree.delete(&9_999), Some(9_999));
//! assert_eq!(tree.max(), Some(&9_998));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::InvariantError;
use crate::node::{self, Iter, Link, Node};

/// A plain (unbalanced) Binary Search Tree of keys whose operations are
/// implemented with loops.
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
    /// use ordered_tree::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            match key.cmp(&node.key) {
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
                Ordering::Equal => {
                    trace!("ignored duplicate key");
                    return false;
                }
            }
        }

        *cursor = Some(Node::new_boxed(key));
        self.len += 1;
        trace!(len = self.len, "inserted key");
        true
    }

    /// Finds the node holding `key`. If no node has the key, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::iterative::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&3).map(|n| n.key()), Some(&3));
    /// assert!(tree.search(&10).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(n),
                Ordering::Greater => n.right(),
            };
        }
        None
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
    /// use ordered_tree::iterative::Tree;
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
        let deleted = delete(&mut self.root, key);

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
    /// use ordered_tree::iterative::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse_in_order(), [&2, &3, &4, &5, &6, &7, &8]);
    /// ```
    pub fn traverse_in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        keys.extend(self.iter());
        keys
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

/// Deletes `key` from the subtree owned by `cursor`, rewiring the slot that
/// owns the removed node in place.
fn delete<K>(mut cursor: &mut Link<K>, key: &K) -> Option<K>
where
    K: Ord,
{
    // Find the slot owning `key`. The comparison is done through a shared
    // borrow so that stopping on `Equal` leaves `cursor` usable.
    loop {
        let ordering = key.cmp(&cursor.as_deref()?.key);
        if ordering == Ordering::Equal {
            break;
        }
        let Some(node) = cursor else {
            return None;
        };
        cursor = match ordering {
            Ordering::Less => &mut node.left,
            _ => &mut node.right,
        };
    }

    let node = cursor.as_deref_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor = take_leftmost(&mut node.right)?;
        trace!("promoted in-order successor");
        return Some(mem::replace(&mut node.key, successor));
    }

    // At most one child, which takes the node's place.
    let Node {
        key: deleted,
        left,
        right,
    } = *cursor.take()?;
    *cursor = left.or(right);
    Some(deleted)
}

/// Removes the leftmost node of the subtree owned by `cursor`, replacing it
/// with its right child. Returns the removed key, or `None` for an empty
/// subtree.
fn take_leftmost<K>(mut cursor: &mut Link<K>) -> Option<K> {
    while cursor.as_deref()?.left.is_some() {
        cursor = &mut cursor.as_deref_mut()?.left;
    }

    let Node { key, right, .. } = *cursor.take()?;
    *cursor = right;
    Some(key)
}
