//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] yo_storage::StorageError),

    #[error("Mapping error: {0}")]
    Mappings(#[from] yo_mappings::MappingError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
