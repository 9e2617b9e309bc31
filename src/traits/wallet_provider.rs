use async_trait::async_trait;

use crate::error::ConnectError;

/// Source of account identifiers, e.g. a browser or desktop wallet
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet to authorize this client and return its accounts.
    ///
    /// May suspend until the user approves or rejects the request.
    async fn request_accounts(&self) -> Result<Vec<String>, ConnectError>;
}
