use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("At least {min} entries must remain")]
    MinimumEntries { min: usize },
    #[error("No entry with id '{0}'")]
    UnknownEntry(String),
    #[error("Entry label must not be empty")]
    EmptyLabel,
    #[error("Entry value must be finite, got {0}")]
    NonFiniteValue(f64),
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
