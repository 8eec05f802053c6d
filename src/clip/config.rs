use crate::error::{ClipError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for clip, read from `config.json` next to the history.
///
/// The file is written by hand; clip itself never creates or updates it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClipConfig {
    /// Echo added text back to stdout. `--silent` overrides this per call.
    #[serde(default = "default_echo_on_add")]
    pub echo_on_add: bool,
}

fn default_echo_on_add() -> bool {
    true
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            echo_on_add: default_echo_on_add(),
        }
    }
}

impl ClipConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ClipError::Io)?;
        let config: ClipConfig =
            serde_json::from_str(&content).map_err(ClipError::Serialization)?;
        Ok(config)
    }

    /// Whether an add should stay quiet, given the `--silent` flag.
    pub fn silent(&self, silent_flag: bool) -> bool {
        silent_flag || !self.echo_on_add
    }
}
