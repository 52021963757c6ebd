use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::stats::accumulator::LabelStats;

pub(crate) const KEY_LINES: &str = "Lines";

const SUFFIX_TOTAL: &str = "Total";
const SUFFIX_COUNTS: &str = "Counts";
const SUFFIX_MEAN: &str = "Mean";
const SUFFIX_VARIANCE: &str = "Variance";

pub enum SnapshotFormat {
    Csv,
    Tsv,
    Json,
}

/// Point-in-time copy of a parse pass's accumulated statistics.
///
/// Flat map from `"Lines"` and `"<label> <stat>"` keys to values,
/// returned by value with no aliasing of the accumulator it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatsSnapshot {
    values: BTreeMap<String, f64>,
}

impl StatsSnapshot {
    pub(crate) fn with_lines(lines: u64) -> Self {
        let mut values = BTreeMap::new();
        values.insert(KEY_LINES.to_string(), lines as f64);
        Self { values }
    }

    pub(crate) fn insert_label(&mut self, label: &str, stats: &LabelStats) {
        self.values
            .insert(format!("{label} {SUFFIX_TOTAL}"), stats.total());
        self.values
            .insert(format!("{label} {SUFFIX_COUNTS}"), stats.count() as f64);
        self.values
            .insert(format!("{label} {SUFFIX_MEAN}"), stats.mean());
        self.values
            .insert(format!("{label} {SUFFIX_VARIANCE}"), stats.variance());
    }

    /// Number of lines the pass read, matched or not.
    pub fn lines(&self) -> u64 {
        self.values.get(KEY_LINES).copied().unwrap_or(0.0) as u64
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn total(&self, label: &str) -> Option<f64> {
        self.get(&format!("{label} {SUFFIX_TOTAL}"))
    }

    pub fn counts(&self, label: &str) -> Option<f64> {
        self.get(&format!("{label} {SUFFIX_COUNTS}"))
    }

    pub fn mean(&self, label: &str) -> Option<f64> {
        self.get(&format!("{label} {SUFFIX_MEAN}"))
    }

    pub fn variance(&self, label: &str) -> Option<f64> {
        self.get(&format!("{label} {SUFFIX_VARIANCE}"))
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: SnapshotFormat) -> Result<()> {
        match fmt {
            SnapshotFormat::Csv => self.export_with_delimiter(path, ','),
            SnapshotFormat::Tsv => self.export_with_delimiter(path, '\t'),
            SnapshotFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<()> {
        let mut w = File::create(path)?;
        writeln!(w, "key{delimiter}value")?;
        for (key, value) in &self.values {
            writeln!(w, "{key}{delimiter}{value}")?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let w = File::create(path)?;
        serde_json::to_writer_pretty(w, self).map_err(std::io::Error::from)?;
        Ok(())
    }
}
