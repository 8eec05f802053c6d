use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipError {
    #[error("No text provided to add to the clipboard")]
    EmptyInput,

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    #[error("Conflicting arguments: {0}")]
    ConflictingArguments(String),

    #[error("Invalid arguments: {0}")]
    MalformedArguments(String),

    #[error("Not implemented yet: {0}")]
    Unimplemented(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl ClipError {
    /// Errors caused by what the user asked for, as opposed to the history file.
    /// The CLI follows these with the usage text.
    pub fn is_usage(&self) -> bool {
        !matches!(
            self,
            ClipError::Io(_) | ClipError::Serialization(_) | ClipError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClipError>;
