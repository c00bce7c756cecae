use serde::{Deserialize, Serialize};

use userhub_users::User;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub nickname: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNicknameRequest {
    pub user_id: String,
    pub nickname: String,
}

impl UpdateNicknameRequest {
    pub fn new(user_id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().value().to_string(),
            nickname: user.nickname().map(str::to_string),
            avatar: user.avatar().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userhub_users::UserId;

    #[test]
    fn response_uses_camel_case_user_id() {
        let user = User::new(UserId::new("abcdef0142"), "n", "a.png");
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"userId": "abcdef0142", "nickname": "n", "avatar": "a.png"})
        );
    }

    #[test]
    fn unset_attributes_map_to_null() {
        let user = User::create(UserId::new("1"));
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert!(json["nickname"].is_null());
        assert!(json["avatar"].is_null());
    }
}
