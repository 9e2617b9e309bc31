use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::level_filters::LevelFilter;

use crate::providers::{
    coins_api::{CoinsApiClient, DEFAULT_COINS_API_URL},
    wallet::{JsonRpcWalletProvider, MissingWalletProvider, StaticWalletProvider},
};
use crate::traits::{token_source::TokenSource, wallet_provider::WalletProvider};

/// Where account identifiers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletSource {
    /// `eth_requestAccounts` against a JSON-RPC endpoint
    JsonRpc(String),
    /// A fixed address
    Static(String),
    /// Nothing configured; activation fails as if no wallet were installed
    Missing,
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub coins_api_url: String,
    pub wallet: WalletSource,
    pub request_timeout: Option<Duration>,
    pub html_output: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coins_api_url: DEFAULT_COINS_API_URL.to_string(),
            wallet: WalletSource::Missing,
            request_timeout: None,
            html_output: None,
            log_level: LevelFilter::INFO,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let coins_api_url = get("COINS_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_COINS_API_URL.to_string());

        let wallet = match (get("WALLET_RPC_URL"), get("WALLET_ADDRESS")) {
            (Some(rpc_url), _) => WalletSource::JsonRpc(rpc_url),
            (None, Some(address)) => WalletSource::Static(address),
            (None, None) => WalletSource::Missing,
        };

        let request_timeout = get("REQUEST_TIMEOUT_MS")
            .map(|ms| {
                ms.parse::<u64>()
                    .with_context(|| format!("Invalid REQUEST_TIMEOUT_MS: {}", ms))
            })
            .transpose()?
            .map(Duration::from_millis);

        let html_output = get("HTML_OUTPUT").map(PathBuf::from);

        let log_level = get("LOG_LEVEL")
            .map(|level| {
                LevelFilter::from_str(&level)
                    .with_context(|| format!("Invalid LOG_LEVEL: {}", level))
            })
            .transpose()?
            .unwrap_or(LevelFilter::INFO);

        Ok(Self {
            coins_api_url,
            wallet,
            request_timeout,
            html_output,
            log_level,
        })
    }

    /// Build the wallet provider this configuration points at
    pub fn build_wallet(&self) -> Arc<dyn WalletProvider> {
        match &self.wallet {
            WalletSource::JsonRpc(url) => Arc::new(JsonRpcWalletProvider::new(url.clone())),
            WalletSource::Static(address) => Arc::new(StaticWalletProvider::single(address.clone())),
            WalletSource::Missing => Arc::new(MissingWalletProvider),
        }
    }

    /// Build the coins service client
    pub fn build_token_source(&self) -> anyhow::Result<Arc<dyn TokenSource>> {
        let client = match self.request_timeout {
            Some(timeout) => CoinsApiClient::with_timeout(self.coins_api_url.clone(), timeout)?,
            None => CoinsApiClient::new(self.coins_api_url.clone()),
        };
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_service() {
        let config = config(&[]).unwrap();
        assert_eq!(config.coins_api_url, "http://127.0.0.1:8000");
        assert_eq!(config.wallet, WalletSource::Missing);
        assert!(config.request_timeout.is_none());
        assert!(config.html_output.is_none());
        assert_eq!(config.log_level, LevelFilter::INFO);
    }

    #[test]
    fn rpc_wallet_wins_over_static_address() {
        let config = config(&[
            ("WALLET_RPC_URL", "http://127.0.0.1:1248"),
            ("WALLET_ADDRESS", "0xABC"),
        ])
        .unwrap();
        assert_eq!(config.wallet, WalletSource::JsonRpc("http://127.0.0.1:1248".into()));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config(&[("WALLET_RPC_URL", "  "), ("WALLET_ADDRESS", "0xABC")]).unwrap();
        assert_eq!(config.wallet, WalletSource::Static("0xABC".into()));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = config(&[("COINS_API_URL", "http://localhost:9000/")]).unwrap();
        assert_eq!(config.coins_api_url, "http://localhost:9000");
    }

    #[test]
    fn timeout_and_level_are_parsed() {
        let config = config(&[
            ("REQUEST_TIMEOUT_MS", "2500"),
            ("LOG_LEVEL", "debug"),
            ("HTML_OUTPUT", "tokens.html"),
        ])
        .unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_millis(2500)));
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert_eq!(config.html_output, Some(PathBuf::from("tokens.html")));
    }

    #[test]
    fn bad_timeout_is_an_error() {
        assert!(config(&[("REQUEST_TIMEOUT_MS", "soon")]).is_err());
    }
}
