use crate::storage::StoreError;

use thiserror::Error;

/// Errors returned by the `MvpBoard` actor.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("failed to build parsing thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("board mailbox error: {0}")]
    Mailbox(#[from] actix::MailboxError),
}

pub type Result<T> = std::result::Result<T, BoardError>;
