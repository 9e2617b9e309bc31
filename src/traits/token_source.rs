use async_trait::async_trait;

use crate::error::ConnectError;
use crate::models::token::TokenRecord;

/// Trait for services that list the tokens held by an account
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch all token balances for an account
    async fn fetch_tokens(&self, account: &str) -> Result<Vec<TokenRecord>, ConnectError>;
}
