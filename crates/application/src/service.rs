//! User application service.

use tracing::{debug, info, instrument};

use userhub_core::AggregateRoot;
use userhub_users::{IdGenerator, RandomIdGenerator, User, UserField, UserId, UserRepository};

use crate::dto::{CreateUserRequest, UpdateNicknameRequest, UserResponse};
use crate::error::AppResult;

/// Use cases exposed to the interface layer.
pub trait UserAppService: Send + Sync {
    /// Fetch one user. Fails with `NotFound` if no such user exists.
    fn get_user_by_id(&self, user_id: &str) -> AppResult<UserResponse>;

    /// Create a user under a freshly generated id and persist it.
    fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse>;

    /// Rename a user. Fails with `NotFound` (and saves nothing) if no such user exists.
    fn update_user_nickname(&self, request: UpdateNicknameRequest) -> AppResult<()>;

    /// Set the attribute an accessor identifier reads (`getAvatar`, `nickname`).
    ///
    /// Fails with `FieldNotFound`/`ImmutableField` from the aggregate, or
    /// `NotFound` from the repository. Nothing is saved on failure.
    fn update_user_attribute(
        &self,
        user_id: &str,
        accessor: &str,
        value: String,
    ) -> AppResult<UserResponse>;
}

/// Default [`UserAppService`] over any repository and id source.
pub struct UserAppServiceImpl<R, G = RandomIdGenerator> {
    repository: R,
    ids: G,
}

impl<R> UserAppServiceImpl<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self::with_id_generator(repository, RandomIdGenerator)
    }
}

impl<R, G> UserAppServiceImpl<R, G>
where
    R: UserRepository,
    G: IdGenerator,
{
    pub fn with_id_generator(repository: R, ids: G) -> Self {
        Self { repository, ids }
    }

    fn load(&self, user_id: &str) -> AppResult<User> {
        let id: UserId = user_id.parse()?;
        Ok(self.repository.find_by_id(&id)?)
    }
}

impl<R, G> UserAppService for UserAppServiceImpl<R, G>
where
    R: UserRepository,
    G: IdGenerator,
{
    #[instrument(skip(self))]
    fn get_user_by_id(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = self.load(user_id)?;
        Ok(UserResponse::from(&user))
    }

    #[instrument(skip(self, request))]
    fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let user = User::new(self.ids.generate(), request.nickname, request.avatar);
        let saved = self.repository.save(&user)?;

        info!(aggregate = User::aggregate_type(), user_id = %saved.id(), "user created");
        Ok(UserResponse::from(&saved))
    }

    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    fn update_user_nickname(&self, request: UpdateNicknameRequest) -> AppResult<()> {
        let mut user = self.load(&request.user_id)?;
        user.update(UserField::Nickname, request.nickname);
        self.repository.save(&user)?;

        debug!(aggregate = User::aggregate_type(), "nickname updated");
        Ok(())
    }

    #[instrument(skip(self, value))]
    fn update_user_attribute(
        &self,
        user_id: &str,
        accessor: &str,
        value: String,
    ) -> AppResult<UserResponse> {
        let mut user = self.load(user_id)?;
        user.update_by_accessor(accessor, value)?;
        let saved = self.repository.save(&user)?;

        debug!(aggregate = User::aggregate_type(), "attribute updated");
        Ok(UserResponse::from(&saved))
    }
}
