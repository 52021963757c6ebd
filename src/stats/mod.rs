mod accumulator;
mod snapshot;

pub use accumulator::{LabelStats, RunningStats};
pub use snapshot::{SnapshotFormat, StatsSnapshot};
