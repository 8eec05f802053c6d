use clip::api::CmdResult;
use std::io::{self, Write};

/// Writes a result to `out`: raw text first (no newline added), then one line per entry.
pub(super) fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    if let Some(text) = &result.text {
        out.write_all(text.as_bytes())?;
    }
    for line in &result.lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Prints a result to stdout. A closed pipe (`clip -l | head -1`) is not an error.
pub(super) fn print_result(result: &CmdResult) -> io::Result<()> {
    let stdout = io::stdout();
    match write_result(&mut stdout.lock(), result) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
