use crate::commands::CmdResult;
use crate::error::Result;
use crate::history::History;
use crate::index::resolve;
use tracing::debug;

/// Deletes the entries at the given relative indexes; `[]` means the newest.
///
/// Every index is resolved before anything is removed, so one bad index leaves
/// the history untouched.
pub fn run(history: &mut History, indices: &[i64]) -> Result<CmdResult> {
    let requested: &[i64] = if indices.is_empty() { &[0] } else { indices };

    let mut positions = requested
        .iter()
        .map(|&idx| resolve(idx, history.len()))
        .collect::<Result<Vec<usize>>>()?;

    // Highest first: removing a position only shifts the ones above it.
    positions.sort_unstable_by(|a, b| b.cmp(a));
    positions.dedup();

    for position in positions {
        let removed = history.remove(position)?;
        debug!(position, hash = %removed.hash, "deleted entry");
    }

    Ok(CmdResult::default())
}

pub fn all(history: &mut History) -> CmdResult {
    history.clear();
    CmdResult::default()
}
