use std::io::BufRead;

use crate::error::Result;
use crate::matching::TokenMatcher;

enum WindowState {
    Waiting,
    Collecting,
}

/// Collects the lines between two time tokens, in file order.
///
/// Tokens are compared by string equality. The line matching `start`
/// opens the window and is included; the line matching `stop` closes it
/// and is excluded, ending the read immediately. The stop check runs
/// before inclusion, so `start == stop` collects nothing. Lines with no
/// extractable token are skipped in every state.
pub(crate) fn scan(
    reader: impl BufRead,
    start: &str,
    stop: &str,
    times: &dyn TokenMatcher,
) -> Result<Vec<String>> {
    let mut state = WindowState::Waiting;
    let mut collected = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let Some(token) = times.token(&line) else {
            continue;
        };
        if matches!(state, WindowState::Waiting) && token == start {
            state = WindowState::Collecting;
        }
        if matches!(state, WindowState::Collecting) {
            if token == stop {
                break;
            }
            collected.push(line);
        }
    }
    Ok(collected)
}
