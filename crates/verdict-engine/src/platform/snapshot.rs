//! Snapshot-backed cluster source: `kubectl get … -o json` dump files.

use std::path::{Path, PathBuf};

use serde_json::Value;

use verdict_core::errors::ClusterError;

use super::cluster::ClusterRead;
use super::types::{Node, Pod};

/// Cluster read capability backed by `nodes.json` / `pods.json` dumps.
///
/// These are the artifacts the platform test layer uploads. A live client
/// would implement [`ClusterRead`] directly and bound its calls with the
/// configured read timeout; file reads are already bounded.
#[derive(Debug, Clone)]
pub struct SnapshotCluster {
    nodes_path: PathBuf,
    pods_path: PathBuf,
}

impl SnapshotCluster {
    pub fn new(nodes_path: impl Into<PathBuf>, pods_path: impl Into<PathBuf>) -> Self {
        Self {
            nodes_path: nodes_path.into(),
            pods_path: pods_path.into(),
        }
    }

    fn read_items<T: serde::de::DeserializeOwned>(
        path: &Path,
        resource: &str,
    ) -> Result<Vec<T>, ClusterError> {
        let raw = std::fs::read_to_string(path).map_err(|err| ClusterError::Unreachable {
            message: format!("{}: {err}", path.display()),
        })?;
        let value: Value =
            serde_json::from_str(&raw).map_err(|err| ClusterError::ListFailed {
                resource: resource.to_string(),
                message: err.to_string(),
            })?;
        let items = value
            .get("items")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        serde_json::from_value(items).map_err(|err| ClusterError::ListFailed {
            resource: resource.to_string(),
            message: err.to_string(),
        })
    }
}

impl ClusterRead for SnapshotCluster {
    fn list_nodes(&self) -> Result<Vec<Node>, ClusterError> {
        Self::read_items(&self.nodes_path, "nodes")
    }

    fn list_pods_all_namespaces(&self) -> Result<Vec<Pod>, ClusterError> {
        Self::read_items(&self.pods_path, "pods")
    }
}
