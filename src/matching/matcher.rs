use crate::matching::field::FieldMatch;

/// Strategy for pulling a timestamp-like token out of a raw log line.
///
/// Implementations must be pure: the same line always yields the same
/// token, and a `None` means the line carries no token at all (the
/// analysis passes skip such lines rather than failing).
pub trait TokenMatcher {
    /// Returns the first token in `line` matching this strategy, or
    /// `None` when the line has no token.
    fn token<'a>(&self, line: &'a str) -> Option<&'a str>;
}

/// Strategy for extracting the trailing `label: number` field of a line.
///
/// A `None` is the ordinary outcome for lines without a numeric field;
/// callers skip the line without touching any accumulator.
pub trait FieldMatcher {
    /// Extracts the labeled numeric field of `line`, if present.
    fn extract(&self, line: &str) -> Option<FieldMatch>;
}
