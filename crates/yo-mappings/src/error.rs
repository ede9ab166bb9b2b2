//! Mapping error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Storage error: {0}")]
    Storage(#[from] yo_storage::StorageError),

    #[error("Mapping store unavailable: {0}")]
    Unavailable(String),

    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
