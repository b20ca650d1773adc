
use std::cmp::Ordering;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::Node;

static INIT_LOGGING: Once = Once::new();

/// Installs a global `tracing` subscriber writing to the test harness' captured
/// output. The filter comes from `RUST_LOG` and defaults to `warn`, so run
/// with `RUST_LOG=ordered_tree=trace` to see every tree mutation.
pub(crate) fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
        {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
    });
}

/// Pre-order listing of a subtree where every missing child is a `None`. Two
/// trees are shaped the same, with the same keys in the same places, exactly
/// when their listings are equal.
pub(crate) fn shape<K: Clone>(root: Option<&Node<K>>) -> Vec<Option<K>> {
    let mut listing = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            Some(n) => {
                listing.push(Some(n.key.clone()));
                stack.push(n.right());
                stack.push(n.left());
            }
            None => listing.push(None),
        }
    }
    listing
}

/// A key that orders and compares by `id` only, so two equal keys can still be
/// told apart by their `tag`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tagged {
    pub(crate) id: i32,
    pub(crate) tag: &'static str,
}

impl Tagged {
    pub(crate) fn new(id: i32, tag: &'static str) -> Self {
        Self { id, tag }
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
