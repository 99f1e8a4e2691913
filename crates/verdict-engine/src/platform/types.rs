//! Typed shapes for cluster objects and the platform health report.
//!
//! The `Node`/`Pod` structs deserialize directly from `kubectl get … -o
//! json` item shapes; only the fields the evaluator reads are modeled.

use serde::{Deserialize, Serialize};

/// Object metadata subset the evaluator reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
}

/// A node condition entry (`type`/`status` pair).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
}

/// Node status subset: the condition list. The list can be absent or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStatusBlock {
    pub conditions: Option<Vec<NodeCondition>>,
}

/// A cluster node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub metadata: ObjectMeta,
    pub status: NodeStatusBlock,
}

/// Container waiting state; only the reason is inspected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitingState {
    pub reason: String,
}

/// Container state; a non-waiting container carries no waiting block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerState {
    pub waiting: Option<WaitingState>,
}

/// Per-container runtime status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerStatus {
    pub restart_count: u32,
    pub state: ContainerState,
}

/// Pod status subset: the container status list, which can be absent or
/// null for pending pods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodStatusBlock {
    pub container_statuses: Option<Vec<ContainerStatus>>,
}

/// A cluster pod.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pod {
    pub metadata: ObjectMeta,
    pub status: PodStatusBlock,
}

/// Readiness of a single node, derived from its `Ready` condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub name: String,
    pub ready: bool,
}

/// Per-container restart signal. A pod contributes one entry per container
/// status; containers are evaluated independently, never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodRestartSignal {
    pub namespace: String,
    pub name: String,
    pub restart_count: u32,
    pub crash_looping: bool,
}

/// Structured platform health, computed fresh on every evaluation.
///
/// Invariant: `ready_nodes + not_ready_node_names.len() <= total_nodes` —
/// a node without a `Ready` condition is excluded from both sides. List
/// ordering follows the input enumeration order of the cluster source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformHealthReport {
    /// False when the node listing failed or returned an empty cluster.
    pub cluster_reachable: bool,
    pub total_nodes: usize,
    pub ready_nodes: usize,
    pub not_ready_node_names: Vec<String>,
    pub total_pods: usize,
    /// `"ns/name"` per crash-looping container status.
    pub crashloop_pods: Vec<String>,
    /// `"ns/name (restarts=N)"` per container above the restart threshold.
    pub restart_risk_pods: Vec<String>,
}
