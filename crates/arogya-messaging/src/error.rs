use thiserror::Error;

use arogya_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("send failed: {0}")]
    Send(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
