//! Error types shared by the traversal engine and the centrality driver.

use thiserror::Error;

/// Errors surfaced by graph access, configuration and orchestration.
///
/// Every variant is fatal for the computation that produced it: a batch that
/// fails never commits a contribution to the shared score array.
#[derive(Error, Debug)]
pub enum Error {
    /// The batch width must be at least one source.
    #[error("batch width must be > 0, got {0}")]
    InvalidBatchWidth(usize),

    /// The worker pool needs at least one worker.
    #[error("concurrency must be > 0, got {0}")]
    InvalidConcurrency(usize),

    /// A node id outside `[0, node_count)` was passed to or produced by the graph.
    #[error("node {node} is out of range for node_count={node_count}")]
    NodeOutOfRange {
        /// Offending node id.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// The same source node appeared twice in one batch.
    #[error("source {0} appears more than once in the batch")]
    DuplicateSource(usize),

    /// The graph layer failed to iterate relationships.
    #[error("graph access failed: {0}")]
    GraphAccess(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {source}")]
    InvalidConfig {
        /// Underlying parse error.
        #[from]
        source: serde_json::Error,
    },

    /// The computation was cancelled between two batches.
    #[error("computation terminated")]
    Terminated,

    /// A worker thread panicked while processing a batch.
    #[error("worker thread panicked")]
    WorkerPanicked,
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = Error::NodeOutOfRange {
            node: 7,
            node_count: 3,
        };
        assert_eq!(err.to_string(), "node 7 is out of range for node_count=3");
        assert_eq!(
            Error::InvalidBatchWidth(0).to_string(),
            "batch width must be > 0, got 0"
        );
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}
