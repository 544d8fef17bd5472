use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid question #{index}: {message}")]
    InvalidQuestion { index: usize, message: String },

    #[error("Input stream closed")]
    InputClosed,

    #[error("Failed to persist {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Persist {
            path: err.file.path().display().to_string(),
            source: err.error,
        }
    }
}
