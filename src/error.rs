//! Error types for the client.

use thiserror::Error;

use crate::models::ItemId;

/// Failures of the remote item service, one variant per operation.
/// The payload is already human readable (`HTTP error! Status: 500`, transport text).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    Create(String),
    #[error("{0}")]
    Update(String),
    #[error("{0}")]
    Delete(String),
}

/// Why an action handler returned early.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("title must not be empty")]
    Validation,
    #[error("item {0} is not in the list")]
    NotFoundLocal(ItemId),
    #[error(transparent)]
    Network(#[from] ApiError),
}
