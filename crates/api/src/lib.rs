//! HTTP API: routing, request/response mapping, and the remote client.

pub mod app;
pub mod client;
pub mod config;

pub use client::{ClientError, UserClient};
pub use config::ApiConfig;
