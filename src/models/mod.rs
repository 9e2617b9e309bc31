//! Data models for the connect-and-list component

pub mod token;
pub mod view_state;

// Re-export for convenience
pub use token::{Balance, CoinsResponse, TokenRecord};
pub use view_state::{TokenRow, TokenTable, TriggerControl, ViewState};
