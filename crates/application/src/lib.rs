//! Application layer: use cases over the `User` aggregate.
//!
//! Services here translate request DTOs into domain calls, drive the
//! repository port, and map aggregates back to response DTOs. No HTTP, no
//! storage specifics.

pub mod dto;
pub mod error;
pub mod service;

pub use dto::{CreateUserRequest, UpdateNicknameRequest, UserResponse};
pub use error::{AppError, AppResult};
pub use service::{UserAppService, UserAppServiceImpl};
