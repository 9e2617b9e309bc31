//! The connect-and-list component

pub mod connect_and_list;

pub use connect_and_list::{ActivationOutcome, ConnectAndListTokens};
