//! HTTP-only request shapes. Use-case DTOs live in `userhub-application`.

use serde::Deserialize;

/// Query string of `PUT /api/v1/users/:user_id/nickname`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicknameQuery {
    pub new_nickname: String,
}

/// Body of `PATCH /api/v1/users/:user_id/attributes/:accessor`.
#[derive(Debug, Deserialize)]
pub struct AttributeUpdateRequest {
    pub value: String,
}
