//! External content used to bootstrap the job catalog.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const FETCH_TIMEOUT_SECS: u64 = 30;

/// One upstream post; only its body feeds job descriptions.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub body: String,
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<ContentItem>>;
}

/// Fetches a JSON array of posts over HTTP.
pub struct HttpContentSource {
    client: Client,
    url: String,
}

impl HttpContentSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_items(&self) -> Result<Vec<ContentItem>> {
        let items: Vec<ContentItem> = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.url))?
            .error_for_status()?
            .json()
            .await
            .context("job source returned malformed JSON")?;
        debug!("Fetched {} content items from {}", items.len(), self.url);
        Ok(items)
    }
}

#[cfg(test)]
pub struct StaticSource {
    items: Vec<ContentItem>,
    fail: bool,
}

#[cfg(test)]
impl StaticSource {
    /// `n` items with distinct bodies, each tagged with `tag`.
    pub fn numbered(n: usize, tag: &str) -> Self {
        Self {
            items: (0..n)
                .map(|i| ContentItem {
                    body: format!("{tag} body {i}"),
                })
                .collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            items: Vec::new(),
            fail: true,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ContentSource for StaticSource {
    async fn fetch_items(&self) -> Result<Vec<ContentItem>> {
        if self.fail {
            anyhow::bail!("source unavailable");
        }
        Ok(self.items.clone())
    }
}
