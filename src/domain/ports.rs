use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP collaborator used by the aggregate. Every call is a single
/// round-trip authenticated with a bearer token.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, token: &str) -> Result<Value>;
    async fn post(&self, url: &str, payload: &Value, token: &str) -> Result<Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn token(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}
