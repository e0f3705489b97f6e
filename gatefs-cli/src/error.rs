use inquire::error::InquireError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateFsCliError {
    #[error("Input error: {0}")]
    Input(String),
    #[error("{0}")]
    GateFs(#[from] gatefs::GateFsError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    InteractionError(#[from] InquireError),
}

pub type Result<T> = std::result::Result<T, GateFsCliError>;
