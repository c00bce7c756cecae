use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, instrument};

use userhub_users::{RepositoryError, RepositoryResult, User, UserId, UserRepository};

use super::row::UserRow;

/// In-memory user repository for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<UserId, UserRow>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored record for `id`, including audit timestamps.
    pub fn row(&self, id: &UserId) -> Option<UserRow> {
        let map = self.rows.read().ok()?;
        map.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E>(_: E) -> RepositoryError {
    RepositoryError::Storage("user store lock poisoned".to_string())
}

impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self), fields(user_id = %id))]
    fn find_by_id(&self, id: &UserId) -> RepositoryResult<User> {
        let map = self.rows.read().map_err(poisoned)?;
        map.get(id)
            .map(UserRow::to_domain)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    fn save(&self, user: &User) -> RepositoryResult<User> {
        let mut map = self.rows.write().map_err(poisoned)?;
        let row = UserRow::from_domain(user, map.get(user.id()), Utc::now());
        let stored = row.to_domain();
        map.insert(user.id().clone(), row);

        debug!("user stored");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use userhub_users::UserField;

    #[test]
    fn save_then_find_round_trips_attributes() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::generate();

        repo.save(&User::new(id.clone(), "n", "a")).unwrap();
        let found = repo.find_by_id(&id).unwrap();

        assert_eq!(found.nickname(), Some("n"));
        assert_eq!(found.avatar(), Some("a"));
    }

    #[test]
    fn find_missing_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("nope");

        assert_eq!(repo.find_by_id(&id), Err(RepositoryError::NotFound(id)));
    }

    #[test]
    fn save_returns_rehydrated_aggregate() {
        let repo = InMemoryUserRepository::new();
        let user = User::new(UserId::new("u1"), "n", "a");

        assert_eq!(repo.save(&user).unwrap(), user);
    }

    #[test]
    fn repeated_saves_are_idempotent() {
        let repo = InMemoryUserRepository::new();
        let user = User::new(UserId::new("u1"), "n", "a");

        repo.save(&user).unwrap();
        let first = repo.row(user.id()).unwrap();
        repo.save(&user).unwrap();
        let second = repo.row(user.id()).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(second.to_domain(), first.to_domain());
        assert_eq!(second.created_at, first.created_at);
        assert!(second.modified_at >= first.modified_at);
    }

    #[test]
    fn update_then_save_is_visible_to_next_read() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("u1");
        repo.save(&User::new(id.clone(), "old", "a")).unwrap();

        let mut user = repo.find_by_id(&id).unwrap();
        user.update(UserField::Nickname, "new");
        repo.save(&user).unwrap();

        assert_eq!(repo.find_by_id(&id).unwrap().nickname(), Some("new"));
    }

    #[test]
    fn shared_through_arc() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let id = UserId::new("u1");

        UserRepository::save(&repo, &User::create(id.clone())).unwrap();

        assert!(UserRepository::find_by_id(&repo, &id).is_ok());
        assert!(!repo.is_empty());
    }
}
