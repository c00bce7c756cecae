//! Storage collaborators implementing the users repository port.

pub mod in_memory;
pub mod row;

pub use in_memory::InMemoryUserRepository;
pub use row::UserRow;
