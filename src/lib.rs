//! Coin Lens Library
//!
//! Connects to a wallet, asks it for an account and lists that account's
//! token balances as served by a coins service at `/coins/{account}`.

// Public modules - these are the API surface
pub mod component;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use component::{ActivationOutcome, ConnectAndListTokens};
pub use config::{Config, WalletSource};
pub use error::ConnectError;
pub use handlers::{CompositeEventHandler, ConsoleEventHandler, HtmlRenderer};
pub use models::{
    token::{Balance, TokenRecord},
    view_state::{TokenRow, TokenTable, TriggerControl, ViewState},
};
pub use providers::{
    coins_api::CoinsApiClient,
    wallet::{JsonRpcWalletProvider, MissingWalletProvider, StaticWalletProvider},
};
pub use traits::{
    event_handler::ViewEventHandler, token_source::TokenSource, wallet_provider::WalletProvider,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
