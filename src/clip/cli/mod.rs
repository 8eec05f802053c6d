//! # CLI Behavior
//!
//! This is **one possible UI client** for clip. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Inferring Intent
//!
//! Clip has no subcommands. What it does depends on flags, arguments and stdin:
//!
//! - `clip` pastes the newest entry.
//! - `clip "text"` adds the text, echoing it back.
//! - `echo text | clip` adds the piped text.
//! - `clip -l | fzf | clip -p` pastes whichever listed entry was picked.
//!
//! The precedence between these lives in the library (`clip::interpret`).
//!
//! ## Output
//!
//! Pasted and echoed text is written exactly, with no trailing newline, so it
//! can be piped or substituted into other commands. Listings are one entry per
//! line. Help, errors and logs go to stderr.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch, and error reporting
//! - `render`: Writing results to stdout
//! - `setup`: Argument parsing via clap, help text

mod commands;
mod render;
pub mod setup;

pub use commands::{report_error, run};
