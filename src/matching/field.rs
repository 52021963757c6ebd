use regex::Regex;

use crate::error::{LogError, Result};
use crate::matching::matcher::FieldMatcher;

/// A labeled numeric observation extracted from one line.
///
/// Consumed immediately by the statistics pass; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub label: String,
    pub value: f64,
}

/// Extracts the trailing `label: number` pair of a line.
///
/// The line is split on a single-character separator and only the last
/// segment is inspected; a line without the separator is one segment.
/// The label capture is greedy, so with several colons in the segment
/// the final numeric-tailed colon wins and everything before it
/// (verbatim, leading text included) becomes the aggregation key.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    separator: char,
    pattern: Regex,
}

// Greedy label, then ": ", then digits with at most one decimal point.
const TRAILING_FIELD: &str = r"(.*): (\d+\.?\d*)";

impl FieldPattern {
    pub fn new(separator: char) -> Result<Self> {
        let pattern =
            Regex::new(TRAILING_FIELD).map_err(|source| LogError::MalformedPattern {
                template: TRAILING_FIELD.to_string(),
                source,
            })?;
        Ok(Self { separator, pattern })
    }

    pub fn separator(&self) -> char {
        self.separator
    }
}

impl FieldMatcher for FieldPattern {
    fn extract(&self, line: &str) -> Option<FieldMatch> {
        let segment = line.rsplit(self.separator).next().unwrap_or(line);
        let caps = self.pattern.captures(segment)?;
        let value = caps[2].parse().ok()?;
        Some(FieldMatch {
            label: caps[1].to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> FieldPattern {
        FieldPattern::new('|').unwrap()
    }

    #[test]
    fn extracts_trailing_field() {
        let m = pattern()
            .extract("04:20.00|INFO|CPU_current: 5.0")
            .unwrap();
        assert_eq!(m.label, "CPU_current");
        assert_eq!(m.value, 5.0);
    }

    #[test]
    fn integer_valued_field() {
        let m = pattern().extract("04:20.00|Battery_voltage: 12").unwrap();
        assert_eq!(m.label, "Battery_voltage");
        assert_eq!(m.value, 12.0);
    }

    #[test]
    fn last_numeric_colon_wins() {
        let m = pattern().extract("note: Server_load: 0.75").unwrap();
        assert_eq!(m.label, "note: Server_load");
        assert_eq!(m.value, 0.75);
    }

    #[test]
    fn label_is_verbatim_including_leading_text() {
        let m = pattern().extract("x|  CPU_current: 2.5").unwrap();
        assert_eq!(m.label, "  CPU_current");
    }

    #[test]
    fn line_without_separator_is_one_segment() {
        let m = pattern().extract("CPU_current: 3.25").unwrap();
        assert_eq!(m.label, "CPU_current");
        assert_eq!(m.value, 3.25);
    }

    #[test]
    fn only_last_segment_is_inspected() {
        // The numeric field sits in an earlier segment, so nothing matches.
        assert!(pattern().extract("CPU_current: 5.0|trailing text").is_none());
    }

    #[test]
    fn no_field_is_none() {
        assert!(pattern().extract("04:20.00|INFO|starting up").is_none());
        assert!(pattern().extract("").is_none());
    }

    #[test]
    fn alternate_separator() {
        let p = FieldPattern::new(';').unwrap();
        let m = p.extract("04:20.00;CPU_current: 1.5").unwrap();
        assert_eq!(m.label, "CPU_current");
    }
}
