//! Why a search loop stopped.

/// Stopping condition reported by the runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The current node has no neighbours.
    Exhausted,

    /// No neighbour is strictly better than the current node.
    LocalOptimum,

    /// The iteration budget ran out.
    Budget,
}
