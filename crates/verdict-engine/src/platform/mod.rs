//! Platform health: the cluster read seam, the evaluator, the single-layer
//! release decision accumulator, and the exporter gauge snapshot.

pub mod accumulator;
pub mod cluster;
pub mod evaluator;
pub mod metrics;
pub mod snapshot;
pub mod types;

pub use accumulator::ReleaseDecision;
pub use cluster::ClusterRead;
pub use evaluator::evaluate;
pub use metrics::PlatformGauges;
pub use snapshot::SnapshotCluster;
pub use types::{Node, NodeStatus, PlatformHealthReport, Pod, PodRestartSignal};
