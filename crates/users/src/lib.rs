//! Users domain module.
//!
//! This crate contains the `User` aggregate and its identity, implemented as
//! deterministic domain logic (no IO, no HTTP, no storage). Persistence is
//! reached only through the [`UserRepository`] port.

pub mod id;
pub mod repository;
pub mod user;

pub use id::{IdGenerator, RandomIdGenerator, UserId};
pub use repository::{RepositoryError, RepositoryResult, UserRepository};
pub use user::{User, UserField};
