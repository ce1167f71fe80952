//! Input trigger: one confirmed line of input becomes one query
//!
//! In a terminal the "confirm" action is Enter, so every line read from the
//! input is captured verbatim (minus its line terminator) and enqueued.
//! Empty lines are submitted too.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::dispatch::{DispatchError, DispatchSender};
use crate::search::Query;

/// Errors raised while pumping input into the dispatch queue
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Strip one trailing `\n` or `\r\n`.
#[must_use]
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Read `reader` to EOF, enqueueing each line as a query.
///
/// Returns how many queries were enqueued. Never waits on search cycles.
///
/// # Errors
///
/// Fails on an input read error or if the dispatch queue has closed.
pub async fn pump_lines<R>(mut reader: R, sender: &DispatchSender) -> Result<usize, TriggerError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let mut submitted = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }

        let query = Query::from(strip_line_ending(&line));
        let ticket = sender.enqueue(query)?;
        debug!(ticket, "Query submitted");
        submitted += 1;
    }

    Ok(submitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unix_and_windows_endings_only_once() {
        assert_eq!(strip_line_ending("cat\n"), "cat");
        assert_eq!(strip_line_ending("cat\r\n"), "cat");
        assert_eq!(strip_line_ending("cat"), "cat");
        assert_eq!(strip_line_ending(" cat \n\n"), " cat \n");
        assert_eq!(strip_line_ending("\n"), "");
    }
}
