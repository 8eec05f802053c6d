//! # Clip Architecture
//!
//! Clip is a clipboard history for the command line: it remembers text you
//! copy, keeps each distinct snippet once, and hands snippets back by how
//! recently they were used.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, detects piped stdin, prints, exit codes    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Context object: store backend + loaded history           │
//! │  - Explicit load / run / save                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interpreter (interpret.rs) + Operations (commands/*.rs)    │
//! │  - Flags → one Operation, by fixed precedence               │
//! │  - Operation applied to the History, returns CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  History (history.rs, index.rs) and Storage (store/)        │
//! │  - Ordered entries + derived dedup index                    │
//! │  - HistoryStore trait: FileStore, InMemoryStore             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indexes
//!
//! Users address entries by relative index: `0` is the newest, `1` the one
//! before it, and `-1` the oldest. Storage is oldest first. See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`interpret`]: Command-line intent → [`commands::Operation`]
//! - [`commands`]: One module per operation
//! - [`history`]: The history model and its dedup index
//! - [`index`]: Relative index resolution
//! - [`model`]: `Entry` and content hashing
//! - [`store`]: Persistence
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod interpret;
pub mod model;
pub mod store;

use std::sync::OnceLock;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
pub fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}
