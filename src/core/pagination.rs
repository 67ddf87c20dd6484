use crate::core::{Page, Transport};
use crate::utils::error::{DogHouseError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use url::Url;

/// Walks a paginated listing by following `next` cursors, one request at a time.
pub struct Paginator<'a, T: Transport + ?Sized> {
    transport: &'a T,
    token: &'a str,
    next_url: Option<String>,
    visited: HashSet<String>,
    pages_fetched: usize,
}

impl<'a, T: Transport + ?Sized> Paginator<'a, T> {
    pub fn new(transport: &'a T, start_url: impl Into<String>, token: &'a str) -> Self {
        Self {
            transport,
            token,
            next_url: Some(start_url.into()),
            visited: HashSet::new(),
            pages_fetched: 0,
        }
    }

    /// Fetches the next page, or returns `None` once the previous page had no cursor.
    pub async fn next_page<R: DeserializeOwned>(&mut self) -> Result<Option<Page<R>>> {
        let Some(url) = self.next_url.take() else {
            return Ok(None);
        };

        // 伺服器重複回傳同一個 cursor 時直接中止，避免無限迴圈
        if !self.visited.insert(url.clone()) {
            return Err(DogHouseError::PaginationCycle { url });
        }

        tracing::debug!("Fetching page {} from {}", self.pages_fetched + 1, url);
        let body = self.transport.get(&url, self.token).await?;
        let page: Page<R> = decode_page(&url, body)?;
        tracing::debug!(
            "Page {} returned {} records (next: {:?})",
            self.pages_fetched + 1,
            page.results.len(),
            page.next
        );

        self.next_url = match page.next.as_deref() {
            Some(next) if !next.is_empty() => Some(resolve_cursor(&url, next)?),
            _ => None,
        };
        self.pages_fetched += 1;

        Ok(Some(page))
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_url.is_none()
    }
}

pub fn decode_page<R: DeserializeOwned>(url: &str, body: Value) -> Result<Page<R>> {
    serde_json::from_value(body).map_err(|e| DogHouseError::UnexpectedResponse {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Cursors may be absolute or relative to the page that returned them.
fn resolve_cursor(current: &str, next: &str) -> Result<String> {
    let invalid = |e: url::ParseError| DogHouseError::UnexpectedResponse {
        url: current.to_string(),
        message: format!("invalid next cursor '{}': {}", next, e),
    };

    let base = Url::parse(current).map_err(invalid)?;
    let resolved = base.join(next).map_err(invalid)?;
    Ok(resolved.to_string())
}
