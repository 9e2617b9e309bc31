//! Core traits for the connect-and-list component

pub mod event_handler;
pub mod token_source;
pub mod wallet_provider;

// Re-export for convenience
pub use event_handler::ViewEventHandler;
pub use token_source::TokenSource;
pub use wallet_provider::WalletProvider;
