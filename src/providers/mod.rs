//! Wallet and token data providers

pub mod coins_api;
pub mod wallet;

// Re-export for convenience
pub use coins_api::{CoinsApiClient, DEFAULT_COINS_API_URL};
pub use wallet::{JsonRpcWalletProvider, MissingWalletProvider, StaticWalletProvider};
