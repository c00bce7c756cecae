use thiserror::Error;

use userhub_core::DomainError;
use userhub_users::RepositoryError;

pub type AppResult<T> = Result<T, AppError>;

/// Use-case failure: a domain rule or the repository said no.
///
/// Both are propagated unchanged; nothing is retried or recovered here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Repository(RepositoryError::NotFound(_)))
    }
}
