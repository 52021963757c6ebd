use std::io::BufRead;

use crate::error::Result;
use crate::matching::FieldMatcher;
use crate::stats::{RunningStats, StatsSnapshot};

/// Single forward statistics pass over a line stream.
///
/// Every line read counts toward the pass-wide `"Lines"` total whether
/// or not it carries a field; matched lines feed the accumulator owned
/// by this call. A read failure aborts the pass with no partial
/// snapshot.
pub(crate) fn collect_stats(
    reader: impl BufRead,
    fields: &dyn FieldMatcher,
) -> Result<StatsSnapshot> {
    let mut lines: u64 = 0;
    let mut stats = RunningStats::new();
    for line in reader.lines() {
        let line = line?;
        lines += 1;
        if let Some(m) = fields.extract(&line) {
            stats.observe(&m.label, m.value);
        }
    }
    Ok(stats.snapshot(lines))
}
