//! Remote lookup client for the users service.
//!
//! Other services use this to read a user over HTTP instead of linking the
//! domain crates.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, instrument};

use userhub_application::UserResponse;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("user not found: {0}")]
    NotFound(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for `GET /api/v1/users/{user_id}`.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get_user_by_id(&self, user_id: &str) -> Result<UserResponse, ClientError> {
        debug!("Sending request");
        let res = self
            .http
            .get(format!("{}/api/v1/users/{}", self.base_url, user_id))
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(user_id.to_string())),
            status => Err(ClientError::Status {
                status: status.as_u16(),
                body: res.text().await.unwrap_or_default(),
            }),
        }
    }
}
