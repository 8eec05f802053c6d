use crate::commands::CmdResult;
use crate::error::{ClipError, Result};
use crate::history::History;
use crate::model::is_blank;

/// Stores `text` as the newest entry, echoing it back unless `silent`.
///
/// The echo is the text exactly as given, so `clip foo | other-tool` passes the
/// input through untouched.
pub fn run(history: &mut History, text: &str, silent: bool) -> Result<CmdResult> {
    if is_blank(text) {
        return Err(ClipError::EmptyInput);
    }

    history.add(text);

    let result = CmdResult::default();
    if silent {
        Ok(result)
    } else {
        Ok(result.with_text(text))
    }
}
