use std::io::BufRead;

use crate::error::Result;
use crate::matching::TokenMatcher;

/// Forward pass returning the line(s) whose time token equals `target`.
///
/// With `repeat` false the read stops at the first match; with `repeat`
/// true every matching line is collected in file order.
pub(crate) fn find(
    reader: impl BufRead,
    target: &str,
    times: &dyn TokenMatcher,
    repeat: bool,
) -> Result<Vec<String>> {
    let mut matches = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if times.token(&line) == Some(target) {
            matches.push(line);
            if !repeat {
                break;
            }
        }
    }
    Ok(matches)
}
