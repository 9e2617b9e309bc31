use async_trait::async_trait;

use crate::models::view_state::ViewState;

/// Handler that redraws whenever the component state changes
#[async_trait]
pub trait ViewEventHandler: Send + Sync {
    /// Called after every mutation of the view state
    async fn handle_state_change(&self, state: &ViewState);

    /// Called when an activation fails
    async fn handle_error(&self, error: &anyhow::Error);
}
