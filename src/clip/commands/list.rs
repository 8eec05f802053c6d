use crate::commands::CmdResult;
use crate::error::{ClipError, Result};
use crate::history::History;
use crate::model::escape_newlines;

/// Lists entries newest first, one per line.
///
/// `(0, 0)` means everything. Limits and ranges are reserved for later and
/// fail instead of silently listing the wrong thing.
pub fn run(history: &History, start: i64, end: i64) -> Result<CmdResult> {
    if history.is_empty() {
        return Ok(CmdResult::default());
    }

    if start != 0 || end != 0 {
        return Err(ClipError::Unimplemented(format!(
            "listing with a limit or range ({start},{end})"
        )));
    }

    let lines = history
        .entries()
        .iter()
        .rev()
        .map(|entry| escape_newlines(&entry.data))
        .collect();

    Ok(CmdResult::default().with_lines(lines))
}
