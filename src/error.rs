use thiserror::Error as ThisError;

/// Error enumerates over all possible errors that this package
/// shall return.
///
/// Looking up or deleting a missing key is not an error, those calls
/// return `None` or `false`. Every variant other than `OverwriteKey` is
/// reported by [`Rbt::validate`](crate::Rbt::validate) and points to a
/// broken red-black invariant.
#[derive(Debug, PartialEq, ThisError)]
pub enum Error<K>
where
    K: Clone + Ord,
{
    /// Fatal case, the shared sentinel was colored red.
    #[error("sentinel is not black")]
    SentinelColor,
    /// Fatal case, root of a non-empty tree is red.
    #[error("root is red")]
    RedRoot,
    /// Fatal case, a red node has a red child.
    #[error("consecutive red nodes")]
    ConsecutiveReds,
    /// Fatal case, black-height differs between left and right subtree.
    /// The String component of this variant can be used for debugging.
    #[error("unbalanced blacks, {0}")]
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order.
    #[error("sort error, {0:?} out of order with {1:?}")]
    SortError(K, K),
    /// Fatal case, parent/child links in the arena disagree.
    #[error("broken link, {0}")]
    BrokenLink(String),
    /// Fatal case, (reachable nodes, counted entries) differ.
    #[error("count mismatch, reachable {0} entries {1}")]
    CountMismatch(usize, usize),
    /// Returned by create() API when key is already present.
    #[error("key already present")]
    OverwriteKey,
}
