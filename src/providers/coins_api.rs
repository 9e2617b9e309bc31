use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::ConnectError;
use crate::models::token::{CoinsResponse, TokenRecord};
use crate::traits::token_source::TokenSource;

/// Base URL of the coins service when nothing else is configured
pub const DEFAULT_COINS_API_URL: &str = "http://127.0.0.1:8000";

/// HTTP client for `GET {base}/coins/{account}`
pub struct CoinsApiClient {
    client: Client,
    base_url: String,
}

impl CoinsApiClient {
    /// Create a client without any timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConnectError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the coins URL; the account is pushed as one encoded segment
    pub fn coins_url(&self, account: &str) -> Result<Url, ConnectError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ConnectError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ConnectError::Url(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push("coins")
            .push(account);
        Ok(url)
    }
}

#[async_trait]
impl TokenSource for CoinsApiClient {
    async fn fetch_tokens(&self, account: &str) -> Result<Vec<TokenRecord>, ConnectError> {
        let url = self.coins_url(account)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConnectError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from coins service", body.len());

        let parsed: CoinsResponse = serde_json::from_slice(&body)?;
        Ok(parsed.data)
    }
}
