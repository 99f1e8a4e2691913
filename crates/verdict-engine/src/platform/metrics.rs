//! Exporter gauge snapshot for platform health.
//!
//! Gauges are immutable return values from each evaluation; the exporter
//! process that serves scrapes owns the only mutable, process-wide state.

use serde::{Deserialize, Serialize};

use super::types::PlatformHealthReport;

/// One evaluation's worth of exporter gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformGauges {
    /// 1 when the cluster is reachable, 0 otherwise.
    pub cluster_ready: u8,
    /// Container statuses currently in CrashLoopBackOff.
    pub crashloop_pods: u64,
    /// Container statuses above the restart threshold.
    pub restart_risk: u64,
    /// 1 when the platform gate allows release, 0 otherwise.
    pub release_allowed: u8,
}

impl PlatformGauges {
    /// Snapshot gauges from a health report.
    ///
    /// Release is allowed iff the cluster is reachable and no container is
    /// crash-looping.
    pub fn from_report(report: &PlatformHealthReport) -> Self {
        let crashloop = report.crashloop_pods.len() as u64;
        Self {
            cluster_ready: u8::from(report.cluster_reachable),
            crashloop_pods: crashloop,
            restart_risk: report.restart_risk_pods.len() as u64,
            release_allowed: u8::from(report.cluster_reachable && crashloop == 0),
        }
    }

    /// Render the gauges as Prometheus exposition text.
    pub fn render_prometheus(&self) -> String {
        let mut out = String::new();
        gauge(
            &mut out,
            "kpqe_cluster_ready",
            "Kubernetes cluster reachability (1 = ready, 0 = not ready)",
            self.cluster_ready as u64,
        );
        gauge(
            &mut out,
            "kpqe_crashloop_pods",
            "Number of pods in CrashLoopBackOff",
            self.crashloop_pods,
        );
        gauge(
            &mut out,
            "kpqe_restart_risk",
            "Pods with restart count above the threshold",
            self.restart_risk,
        );
        gauge(
            &mut out,
            "kpqe_release_allowed",
            "Release decision (1 = allowed, 0 = blocked)",
            self.release_allowed as u64,
        );
        out
    }
}

fn gauge(out: &mut String, name: &str, help: &str, value: u64) {
    out.push_str(&format!("# HELP {name} {help}\n"));
    out.push_str(&format!("# TYPE {name} gauge\n"));
    out.push_str(&format!("{name} {value}\n"));
}
