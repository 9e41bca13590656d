//! Error types shared by the search runners.

use thiserror::Error;

/// Errors raised by node construction, configuration and the search loops.
///
/// Running out of neighbours is not an error; it is reported through the
/// runners' termination reason instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A node without a defined value took part in a comparison.
    ///
    /// This happens when the neighbourhood has no scoring function.
    #[error("node at depth {depth} has no defined value")]
    Undefined {
        /// Depth of the offending node in its search tree.
        depth: usize,
    },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
