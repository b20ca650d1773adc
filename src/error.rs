use thiserror::Error;

/// A broken structural invariant found by `validate`.
///
/// The operations on the trees in this crate never produce these. They exist
/// so callers (and the tests) can check that a tree is still a valid BST.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// The keys at in-order positions `position` and `position + 1` are not
    /// strictly ascending. Either a node is on the wrong side of an ancestor
    /// or a key is stored twice.
    #[error("keys at in-order positions {position} and {} are not strictly ascending", .position + 1)]
    Unordered {
        /// In-order index of the first key of the offending pair.
        position: usize,
    },

    /// The tracked length disagrees with the number of reachable nodes.
    #[error("tree records {recorded} keys but {counted} nodes are reachable")]
    LengthMismatch {
        /// The length the tree keeps track of.
        recorded: usize,
        /// The number of nodes actually reachable from the root.
        counted: usize,
    },
}
