//! Cluster read seam.

use verdict_core::errors::ClusterError;

use super::types::{Node, Pod};

/// Capability to enumerate cluster state.
///
/// Implementations own authentication, connection handling, and deadlines;
/// every call must be bounded so that a hanging backend cannot stall the
/// sequential polling loop that re-invokes the evaluator.
pub trait ClusterRead {
    /// List all cluster nodes.
    fn list_nodes(&self) -> Result<Vec<Node>, ClusterError>;

    /// List pods across all namespaces.
    fn list_pods_all_namespaces(&self) -> Result<Vec<Pod>, ClusterError>;
}
