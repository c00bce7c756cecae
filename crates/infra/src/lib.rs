//! Infrastructure layer: storage adapters behind the domain ports.

pub mod repository;

pub use repository::{InMemoryUserRepository, UserRow};
