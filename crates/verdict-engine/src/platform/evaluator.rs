//! Platform health evaluator.
//!
//! Turns a cluster read capability into a bounded set of structured issues.
//! Read failures are absorbed into a degraded report, never propagated; an
//! unreachable cluster yields a structured "not ready" report instead of
//! failing the evaluation pipeline.

use tracing::{debug, warn};

use verdict_core::config::PlatformConfig;
use verdict_core::constants::{CRASHLOOP_REASON, READY_CONDITION};

use super::cluster::ClusterRead;
use super::types::{Node, NodeStatus, PlatformHealthReport, Pod, PodRestartSignal};

/// Evaluate cluster health into a [`PlatformHealthReport`].
///
/// A failed node listing yields `cluster_reachable = false` with zero counts
/// and empty lists. On success, `cluster_reachable` is true only for a
/// non-empty node list: an empty-but-reachable cluster is treated as not
/// ready. A failed pod listing degrades to an empty pod list while the node
/// data already gathered is retained. No retries are performed; retry
/// cadence belongs to the caller that owns the polling loop.
pub fn evaluate(cluster: &dyn ClusterRead, config: &PlatformConfig) -> PlatformHealthReport {
    let mut report = PlatformHealthReport::default();

    let nodes = match cluster.list_nodes() {
        Ok(nodes) => nodes,
        Err(err) => {
            warn!(error = %err, "node listing failed, reporting cluster unreachable");
            return report;
        }
    };

    report.cluster_reachable = !nodes.is_empty();
    report.total_nodes = nodes.len();

    for node in &nodes {
        match node_status(node) {
            Some(status) if status.ready => report.ready_nodes += 1,
            Some(status) => report.not_ready_node_names.push(status.name),
            // No Ready condition: the node counts neither way.
            None => {}
        }
    }

    let pods = match cluster.list_pods_all_namespaces() {
        Ok(pods) => pods,
        Err(err) => {
            warn!(error = %err, "pod listing failed, continuing with node data only");
            Vec::new()
        }
    };

    report.total_pods = pods.len();
    let threshold = config.effective_restart_threshold();

    for pod in &pods {
        for signal in restart_signals(pod) {
            if signal.crash_looping {
                report
                    .crashloop_pods
                    .push(format!("{}/{}", signal.namespace, signal.name));
            }
            if signal.restart_count > threshold {
                report.restart_risk_pods.push(format!(
                    "{}/{} (restarts={})",
                    signal.namespace, signal.name, signal.restart_count
                ));
            }
        }
    }

    debug!(
        ready_nodes = report.ready_nodes,
        not_ready = report.not_ready_node_names.len(),
        crashloop = report.crashloop_pods.len(),
        restart_risk = report.restart_risk_pods.len(),
        "platform health evaluated"
    );

    report
}

/// Derive a node's readiness from its `Ready` condition.
///
/// Ready only when the condition's status is the literal `"True"`. Returns
/// `None` when the node has no `Ready` condition at all; such a node is
/// counted neither as ready nor as not-ready.
pub fn node_status(node: &Node) -> Option<NodeStatus> {
    let conditions = node.status.conditions.as_deref().unwrap_or_default();
    conditions
        .iter()
        .find(|c| c.condition_type == READY_CONDITION)
        .map(|c| NodeStatus {
            name: node.metadata.name.clone(),
            ready: c.status == "True",
        })
}

/// Derive one restart signal per container status, in input order.
pub fn restart_signals(pod: &Pod) -> Vec<PodRestartSignal> {
    let statuses = pod.status.container_statuses.as_deref().unwrap_or_default();
    statuses
        .iter()
        .map(|status| PodRestartSignal {
            namespace: pod.metadata.namespace.clone(),
            name: pod.metadata.name.clone(),
            restart_count: status.restart_count,
            crash_looping: status
                .state
                .waiting
                .as_ref()
                .is_some_and(|w| w.reason == CRASHLOOP_REASON),
        })
        .collect()
}
