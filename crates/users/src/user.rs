//! The `User` aggregate and its closed set of mutable fields.

use userhub_core::field::{self, FieldSet, GuardedFields};
use userhub_core::{AggregateRoot, DomainResult, Entity};

use crate::id::UserId;

/// Mutable attributes of a [`User`].
///
/// Identity is deliberately not a member: there is no tag that names it, so
/// it cannot be written after construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UserField {
    Nickname,
    Avatar,
}

impl FieldSet for UserField {
    const ALL: &'static [Self] = &[UserField::Nickname, UserField::Avatar];

    fn name(self) -> &'static str {
        match self {
            UserField::Nickname => "nickname",
            UserField::Avatar => "avatar",
        }
    }
}

impl core::fmt::Display for UserField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate root: User.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    nickname: Option<String>,
    avatar: Option<String>,
}

impl User {
    /// Create a user with the given identity and no profile attributes set.
    pub fn create(id: UserId) -> Self {
        Self {
            id,
            nickname: None,
            avatar: None,
        }
    }

    /// Build a fully-populated user (hydration, or a creation command).
    pub fn new(id: UserId, nickname: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            nickname: Some(nickname.into()),
            avatar: Some(avatar.into()),
        }
    }

    /// Rebuild a user from stored attributes, any of which may be unset.
    pub fn rehydrate(id: UserId, nickname: Option<String>, avatar: Option<String>) -> Self {
        Self { id, nickname, avatar }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// The single mutation entry point: set one mutable attribute.
    pub fn update(&mut self, field: UserField, value: impl Into<String>) {
        self.write_field(field, value.into());
    }

    /// Update the attribute an accessor identifier reads (`getNickname`,
    /// `avatar`, ...).
    ///
    /// Fails with `ImmutableField` for the identity accessor and with
    /// `FieldNotFound` when the resolved name is not a field of `User`.
    /// On failure the user is unchanged.
    pub fn update_by_accessor(
        &mut self,
        accessor: &str,
        value: impl Into<String>,
    ) -> DomainResult<()> {
        let descriptor = field::resolve_accessor(accessor);
        field::mutate(self, &descriptor, value.into())
    }
}

impl GuardedFields for User {
    type Field = UserField;
    type Value = String;

    const DECLARED_FIELDS: &'static [&'static str] = &["id", "nickname", "avatar"];

    fn write_field(&mut self, field: UserField, value: String) {
        match field {
            UserField::Nickname => self.nickname = Some(value),
            UserField::Avatar => self.avatar = Some(value),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for User {
    fn aggregate_type() -> &'static str {
        "users.user"
    }
}
