//! The node entity shared by both tree flavours, plus the pieces of tree
//! machinery that never recurse and so can be shared as-is: the in-order
//! iterator, height measurement, teardown and invariant checking.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::InvariantError;

/// An owning, optional child slot. Every `Node` is owned by exactly one `Link`
/// (its parent's child slot or the tree's root slot).
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` holds one stored key and owns up to two children. A `Node` with no
/// children is a leaf.
///
/// Nodes are only ever handed out by shared reference (e.g. from `search` or
/// `root`) so the BST invariant can't be broken from outside the tree.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

/// Shows this node's key and the keys of its direct children only. Following the
/// children any further would recurse once per level.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree, if any. Every key in it is less
    /// than [`Node::key`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any. Every key in it is
    /// greater than [`Node::key`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node holding the smallest key of this subtree.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node holding the largest key of this subtree.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Collects the keys of the subtree rooted at this node in ascending order
    /// by visiting the left subtree, then this node, then the right subtree.
    ///
    /// This recurses to the height of the subtree. Use [`Node::iter`] for
    /// degenerate trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7, 2, 4].into_iter().collect();
    /// let three = tree.search(&3).unwrap();
    ///
    /// assert_eq!(three.traverse_in_order(), [&2, &3, &4]);
    /// ```
    pub fn traverse_in_order(&self) -> Vec<&K> {
        let mut keys = self
            .left()
            .map_or_else(Vec::new, Node::traverse_in_order);
        keys.push(&self.key);
        if let Some(right) = self.right() {
            keys.extend(right.traverse_in_order());
        }
        keys
    }

    /// Lazily iterates over the keys of the subtree rooted at this node in
    /// ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(Some(self))
    }
}

/// An iterator over the keys of a tree (or subtree) in ascending order.
///
/// It keeps the path of not-yet-visited ancestors on an explicit stack, so it
/// uses `O(height)` heap memory and no recursion.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

// Manual implementation so `K` doesn't have to be `Clone`.
impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants. The top of the stack is
    /// then the smallest unvisited key.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

/// Drops every node reachable from `link` without recursing. The default drop
/// glue of `Box<Node<K>>` recurses once per level which overflows the stack
/// for long degenerate chains.
pub(crate) fn dismantle<K>(link: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Counts the nodes on the longest root-to-leaf path below `root` using an
/// explicit stack of `(node, depth)` pairs.
pub(crate) fn height<K>(root: Option<&Node<K>>) -> usize {
    let mut height = 0;
    let mut stack: Vec<(&Node<K>, usize)> = root.map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left().map(|n| (n, depth + 1)));
        stack.extend(node.right().map(|n| (n, depth + 1)));
    }
    height
}

/// Checks the strict BST invariant below `root` and that `recorded` matches the
/// number of reachable nodes.
///
/// A binary tree satisfies the strict BST invariant exactly when its in-order
/// key sequence is strictly ascending, which also rules out duplicates.
pub(crate) fn validate<K>(root: Option<&Node<K>>, recorded: usize) -> Result<(), InvariantError>
where
    K: Ord,
{
    let mut counted = 0;
    let mut previous: Option<&K> = None;
    for key in Iter::new(root) {
        if previous.is_some_and(|previous| previous >= key) {
            return Err(InvariantError::Unordered {
                position: counted - 1,
            });
        }
        previous = Some(key);
        counted += 1;
    }

    if counted == recorded {
        Ok(())
    } else {
        Err(InvariantError::LengthMismatch { recorded, counted })
    }
}
