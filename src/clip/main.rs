//! # Clip CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and turns a failure into exit status 1.
//!
//! Everything from `api.rs` inward takes plain Rust values and never touches
//! the terminal. The CLI layer owns argument parsing, stdin detection, data
//! directory resolution, logging setup, printing, and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
