use super::timing::TimingBreakdown;
use crate::executor::Backend;
use crate::partition::Partition;
use serde::Serialize;
use std::path::PathBuf;

/// Shape of the decoded input as seen by the engine.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub path: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

/// Everything one conversion did; optionally written as JSON next to the output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input: InputDescriptor,
    pub output: Option<PathBuf>,
    pub worker_count: usize,
    pub backend: Backend,
    pub partitions: Vec<Partition>,
    /// Launch-to-join time of the parallel transform alone.
    pub transform_ms: f64,
    pub timing: TimingBreakdown,
}
