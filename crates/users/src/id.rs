//! User identity and identifier generation.

use core::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use userhub_core::{DomainError, ValueObject};

/// Identifier of a user.
///
/// Immutable once constructed; equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an existing identifier (e.g. when hydrating from storage).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh identifier with [`RandomIdGenerator`].
    pub fn generate() -> Self {
        RandomIdGenerator.generate()
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Build the 10-character form: 8 hex digits of `uuid` + a 2-digit suffix.
    fn compose(uuid: &Uuid, suffix: u8) -> Self {
        let hex = uuid.simple().to_string();
        Self(format!("{}{:02}", &hex[..PREFIX_LEN], suffix % SUFFIX_SPACE))
    }
}

impl ValueObject for UserId {}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("UserId: must not be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

const PREFIX_LEN: usize = 8;
const SUFFIX_SPACE: u8 = 100;

/// Source of identifiers for newly created users.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> UserId;
}

/// Probabilistic 10-character identifiers.
///
/// Takes the first 8 lowercase hex digits of a random (v4) UUID and appends a
/// zero-padded decimal suffix drawn uniformly from 0..=99. Identifiers are
/// **not** guaranteed unique: collisions are only made unlikely by the size of
/// the combined space (16^8 * 100). Nothing reserves or checks ids.
#[derive(Debug, Default, Copy, Clone)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> UserId {
        let uuid = Uuid::new_v4();
        let suffix = rand::thread_rng().gen_range(0..SUFFIX_SPACE);
        UserId::compose(&uuid, suffix)
    }
}
