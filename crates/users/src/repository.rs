//! Persistence port for the `User` aggregate.
//!
//! The storage collaborator implements this; the application layer depends
//! on it. It provides at most read-your-writes consistency within one call
//! chain. Locking, retries, and transactions belong to the implementation.

use thiserror::Error;

use crate::id::UserId;
use crate::user::User;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No user exists with that id.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// The backing store failed (unavailable, poisoned, corrupt record, ...).
    #[error("storage error: {0}")]
    Storage(String),
}

/// User repository.
pub trait UserRepository: Send + Sync {
    /// Load a user. Never returns a partially constructed aggregate.
    fn find_by_id(&self, id: &UserId) -> RepositoryResult<User>;

    /// Persist a user and return the stored (re-hydrated) aggregate.
    ///
    /// Idempotent per id: saving identical content again leaves the stored
    /// state equivalent.
    fn save(&self, user: &User) -> RepositoryResult<User>;
}

impl<R> UserRepository for std::sync::Arc<R>
where
    R: UserRepository + ?Sized,
{
    fn find_by_id(&self, id: &UserId) -> RepositoryResult<User> {
        (**self).find_by_id(id)
    }

    fn save(&self, user: &User) -> RepositoryResult<User> {
        (**self).save(user)
    }
}
