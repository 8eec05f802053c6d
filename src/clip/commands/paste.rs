use crate::commands::CmdResult;
use crate::error::Result;
use crate::history::History;
use crate::index::resolve;

/// Pastes the entry at relative `index`.
///
/// Pasting counts as using the snippet again, so anything but the newest entry
/// is promoted to newest.
pub fn run(history: &mut History, index: i64) -> Result<CmdResult> {
    if history.is_empty() {
        return Ok(CmdResult::default());
    }

    let position = resolve(index, history.len())?;
    let data = history.get(position)?.data.clone();

    if position != history.len() - 1 {
        history.remove(position)?;
        history.add(&data);
    }

    Ok(CmdResult::default().with_text(data))
}
