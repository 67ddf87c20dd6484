use crate::core::{ConfigProvider, Transport};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// reqwest-backed transport. Non-2xx statuses are returned as errors.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            Duration::from_secs(config.timeout_seconds()),
            config.user_agent(),
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, token: &str) -> Result<Value> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        let body = response.error_for_status()?.json::<Value>().await?;
        Ok(body)
    }

    async fn post(&self, url: &str, payload: &Value, token: &str) -> Result<Value> {
        tracing::debug!("Posting to: {}", url);
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        let text = response.error_for_status()?.text().await?;

        // 回應內容不一定是 JSON，保留原文以便記錄
        Ok(serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text)))
    }
}
