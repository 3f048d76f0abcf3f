// Error types for grid construction and path search.
//
// Degenerate obstacle boxes are deliberately absent here: a box with zero or
// negative extents blocks nothing and never aborts a build.

use crate::types::NodeId;

/// Errors that reject a grid build. No partial graph is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Non-positive or non-finite span, or a lattice with no cells along
    /// some axis.
    #[error("invalid grid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors from a single path search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// Start or end node is not in `0..node_count`.
    #[error("node index {index} out of range (graph has {node_count} nodes)")]
    IndexOutOfRange { index: NodeId, node_count: usize },

    /// The frontier drained without ever reaching the end node.
    #[error("no path found from node {start} to node {end}")]
    PathNotFound { start: NodeId, end: NodeId },

    /// A point-to-point search was asked of a graph with no nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// The configured expansion budget ran out before the search finished.
    #[error("search gave up after {limit} node expansions")]
    SearchLimitExceeded { limit: u64 },
}
