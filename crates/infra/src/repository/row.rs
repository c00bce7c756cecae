//! Stored representation of a user and its mapping to/from the aggregate.
//!
//! The domain never sees this type; conversion happens only inside infra.

use chrono::{DateTime, Utc};

use userhub_users::{User, UserId};

/// One stored user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub user_id: String,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    /// Set when the record is first written; never updated afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every write.
    pub modified_at: DateTime<Utc>,
}

impl UserRow {
    /// Build the row for `user`, keeping the creation time of `previous` if
    /// the user was stored before.
    pub fn from_domain(user: &User, previous: Option<&UserRow>, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id().value().to_string(),
            nickname: user.nickname().map(str::to_string),
            avatar: user.avatar().map(str::to_string),
            created_at: previous.map(|p| p.created_at).unwrap_or(now),
            modified_at: now,
        }
    }

    pub fn to_domain(&self) -> User {
        User::rehydrate(
            UserId::new(self.user_id.clone()),
            self.nickname.clone(),
            self.avatar.clone(),
        )
    }
}
