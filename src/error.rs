use thiserror::Error;

#[derive(Error, Debug)]
pub enum SorterError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown algorithm selection: {0}")]
    UnknownSelection(String),
    #[error("Sort engine has already run")]
    EngineNotIdle,
    #[error("Sort engine has not completed a run")]
    EngineNotComplete,
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SorterError>;
