use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::json;
use tracing::{debug, warn};

use crate::error::ConnectError;
use crate::traits::wallet_provider::WalletProvider;

const REQUEST_ACCOUNTS: &str = "eth_requestAccounts";

/// Wallet that always answers with a fixed list of accounts
pub struct StaticWalletProvider {
    accounts: Vec<String>,
}

impl StaticWalletProvider {
    pub fn new(accounts: Vec<String>) -> Self {
        Self { accounts }
    }

    /// Wallet holding a single account
    pub fn single(account: impl Into<String>) -> Self {
        Self::new(vec![account.into()])
    }
}

#[async_trait]
impl WalletProvider for StaticWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ConnectError> {
        Ok(self.accounts.clone())
    }
}

/// Stand-in used when no wallet is configured; every request fails
#[derive(Default)]
pub struct MissingWalletProvider;

#[async_trait]
impl WalletProvider for MissingWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ConnectError> {
        Err(ConnectError::WalletUnavailable)
    }
}

/// Wallet reached over JSON-RPC, e.g. a desktop wallet listening locally
pub struct JsonRpcWalletProvider {
    client: Client,
    rpc_url: String,
}

impl JsonRpcWalletProvider {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.into(),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ConnectError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": REQUEST_ACCOUNTS,
            "params": [],
        });

        let response = self
            .client
            .post(&self.rpc_url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Wallet RPC error: Status {}", status);
            return Err(ConnectError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_accounts_reply(&body)
    }
}

/// Decode a JSON-RPC reply to `eth_requestAccounts`
fn parse_accounts_reply(body: &[u8]) -> Result<Vec<String>, ConnectError> {
    let reply: serde_json::Value = serde_json::from_slice(body)?;

    if let Some(error) = reply.get("error") {
        let message = error["message"].as_str().unwrap_or("Unknown wallet error");
        return Err(ConnectError::WalletRejected(message.to_owned()));
    }

    let accounts: Vec<String> = serde_json::from_value(reply["result"].clone())?;
    debug!("Wallet returned {} account(s)", accounts.len());
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_wallet_returns_configured_accounts() {
        let wallet = StaticWalletProvider::single("0xABC");
        assert_eq!(wallet.request_accounts().await.unwrap(), vec!["0xABC".to_string()]);
    }

    #[tokio::test]
    async fn missing_wallet_is_unavailable() {
        let result = MissingWalletProvider.request_accounts().await;
        assert!(matches!(result, Err(ConnectError::WalletUnavailable)));
    }

    #[test]
    fn rpc_result_is_decoded() {
        let body = br#"{"jsonrpc":"2.0","id":1,"result":["0xabc","0xdef"]}"#;
        let accounts = parse_accounts_reply(body).unwrap();
        assert_eq!(accounts, vec!["0xabc".to_string(), "0xdef".to_string()]);
    }

    #[test]
    fn rpc_error_is_a_rejection() {
        let body = br#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User rejected the request."}}"#;
        match parse_accounts_reply(body) {
            Err(ConnectError::WalletRejected(msg)) => assert_eq!(msg, "User rejected the request."),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rpc_garbage_is_a_payload_error() {
        let body = br#"{"jsonrpc":"2.0","id":1,"result":42}"#;
        assert!(matches!(parse_accounts_reply(body), Err(ConnectError::Payload(_))));
    }
}
