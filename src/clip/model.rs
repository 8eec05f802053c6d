use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// A single clipboard snippet.
///
/// Entries are never mutated: promoting one to newest removes it and appends a
/// fresh `Entry` built from the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "d", default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(rename = "h", default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

impl Entry {
    pub fn new(text: &str) -> Self {
        let data = text.trim().to_string();
        let hash = content_hash(&data);
        Self { data, hash }
    }
}

/// Digest used for deduplication: BLAKE3 of the trimmed text, URL-safe base64.
pub fn content_hash(text: &str) -> String {
    let digest = blake3::hash(text.trim().as_bytes());
    URL_SAFE_NO_PAD.encode(digest.as_bytes())
}

/// Turns the two-character sequence `\n` back into a newline.
///
/// List output escapes newlines so each entry fits on one line; anything piped
/// back from it has to be unescaped before it can match stored content.
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// True when there is nothing worth storing, even once `\n` escapes are expanded.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty() || unescape_newlines(text).trim().is_empty()
}
