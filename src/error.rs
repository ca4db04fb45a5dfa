//! Error types for grid rendering

use thiserror::Error;

/// Errors that abort a render call.
#[derive(Debug, Error)]
pub enum GridError {
    /// A structured cell value could not be turned into JSON.
    #[error("Failed to serialize cell value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The rendered grid could not be written to the output sink.
    #[error("Failed to write grid output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
