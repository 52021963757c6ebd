use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;

use crate::analysis::{lookup, parser, time_window};
use crate::error::Result;
use crate::matching::{FieldPattern, TokenMatcher};
use crate::stats::StatsSnapshot;

/// Conventional field separator of the supported log format.
pub const DEFAULT_SEPARATOR: char = '|';

/// One log file on disk, exposing the analysis passes.
///
/// Every pass opens its own handle, reads forward exactly once and
/// releases the handle before returning, on success and on failure
/// alike. The file is never written; independent concurrent passes over
/// the same path are safe.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs the statistics pass with the conventional `|` separator.
    pub fn parse(&self) -> Result<StatsSnapshot> {
        self.parse_with(DEFAULT_SEPARATOR)
    }

    /// Runs the statistics pass, splitting fields on `separator`.
    ///
    /// Returns the merged snapshot: the pass-wide `"Lines"` count plus
    /// four derived stats per observed label. Fails if the path cannot
    /// be opened; no partial snapshot is returned on a mid-pass read
    /// failure.
    pub fn parse_with(&self, separator: char) -> Result<StatsSnapshot> {
        let fields = FieldPattern::new(separator)?;
        let reader = self.open()?;
        let snapshot = parser::collect_stats(reader, &fields)?;
        debug!(
            "parsed {} lines from {}",
            snapshot.lines(),
            self.path.display()
        );
        Ok(snapshot)
    }

    /// Collects the lines between `start` (inclusive) and `stop`
    /// (exclusive), comparing extracted time tokens by string equality.
    ///
    /// The comparison is literal, not chronological: callers pass a
    /// start token that occurs in the file, and out-of-order or
    /// malformatted timestamps yield literal-match windows. A missing
    /// `start` gives an empty result; a missing `stop` collects to end
    /// of file.
    pub fn time_range(
        &self,
        start: &str,
        stop: &str,
        times: &dyn TokenMatcher,
    ) -> Result<Vec<String>> {
        let reader = self.open()?;
        let lines = time_window::scan(reader, start, stop, times)?;
        debug!(
            "time range [{start}, {stop}) matched {} lines in {}",
            lines.len(),
            self.path.display()
        );
        Ok(lines)
    }

    /// Returns the first line whose time token equals `target`, newline
    /// stripped, reading no further than the match.
    pub fn find_first(
        &self,
        target: &str,
        times: &dyn TokenMatcher,
    ) -> Result<Option<String>> {
        let reader = self.open()?;
        let mut matches = lookup::find(reader, target, times, false)?;
        Ok(matches.pop())
    }

    /// Returns every line whose time token equals `target`, in file
    /// order.
    pub fn find_all(&self, target: &str, times: &dyn TokenMatcher) -> Result<Vec<String>> {
        let reader = self.open()?;
        lookup::find(reader, target, times, true)
    }

    fn open(&self) -> Result<BufReader<File>> {
        Ok(BufReader::new(File::open(&self.path)?))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::LogError;
    use crate::matching::TimeTemplate;

    /// The ten-line scenario: lines 3-8 carry consecutive timestamps
    /// `04:20.04` through `04:20.09`, four of them with a
    /// `CPU_current: 5.0` field.
    fn ten_line_log() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "\
starting up\n\
still no timestamp\n\
04:20.04|INFO|CPU_current: 5.0\n\
04:20.05|INFO|steady\n\
04:20.06|INFO|CPU_current: 5.0\n\
04:20.07|WARNING|CPU_current: 5.0\n\
04:20.08|INFO|steady\n\
04:20.09|INFO|CPU_current: 5.0\n\
04:20.10|INFO|winding down\n\
04:20.11|INFO|halt\n"
        )
        .unwrap();
        file
    }

    fn times() -> TimeTemplate {
        TimeTemplate::compile("hh:mm.ss").unwrap()
    }

    #[test]
    fn end_to_end_window_and_stats() {
        let _ = env_logger::builder().is_test(true).try_init();
        let file = ten_line_log();
        let log = LogFile::new(file.path());

        let window = log.time_range("04:20.04", "04:20.10", &times()).unwrap();
        assert_eq!(window.len(), 6);
        assert_eq!(window[0], "04:20.04|INFO|CPU_current: 5.0");
        assert_eq!(window[5], "04:20.09|INFO|CPU_current: 5.0");

        let snapshot = log.parse().unwrap();
        assert_eq!(snapshot.lines(), 10);
        assert_eq!(snapshot.counts("CPU_current"), Some(4.0));
        assert_eq!(snapshot.mean("CPU_current"), Some(5.0));
        assert_eq!(snapshot.variance("CPU_current"), Some(0.0));
    }

    #[test]
    fn time_range_is_idempotent() {
        let file = ten_line_log();
        let log = LogFile::new(file.path());
        let first = log.time_range("04:20.04", "04:20.10", &times()).unwrap();
        let second = log.time_range("04:20.04", "04:20.10", &times()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn find_first_and_find_all() {
        let file = ten_line_log();
        let log = LogFile::new(file.path());
        assert_eq!(
            log.find_first("04:20.07", &times()).unwrap().as_deref(),
            Some("04:20.07|WARNING|CPU_current: 5.0")
        );
        assert_eq!(log.find_first("12:00.00", &times()).unwrap(), None);
        assert_eq!(log.find_all("04:20.05", &times()).unwrap().len(), 1);
        assert!(log.find_all("12:00.00", &times()).unwrap().is_empty());
    }

    #[test]
    fn unopenable_path_is_io_error() {
        let log = LogFile::new("/definitely/not/here.log");
        match log.parse() {
            Err(LogError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
        assert!(log.time_range("a", "b", &times()).is_err());
        assert!(log.find_first("a", &times()).is_err());
    }

    #[test]
    fn parse_with_alternate_separator() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "04:20.00;INFO;Battery_voltage: 11.5\n").unwrap();
        let log = LogFile::new(file.path());
        let snapshot = log.parse_with(';').unwrap();
        assert_eq!(snapshot.counts("Battery_voltage"), Some(1.0));
        // Under the default separator the whole line is one segment and
        // the greedy label swallows the leading fields.
        let snapshot = log.parse().unwrap();
        assert_eq!(snapshot.counts("Battery_voltage"), None);
    }
}
