use std::sync::Arc;
use async_trait::async_trait;

use crate::traits::event_handler::ViewEventHandler;
use crate::models::view_state::ViewState;

/// Composite view handler that forwards to several handlers in order
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn ViewEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn ViewEventHandler>) {
        self.handlers.push(handler);
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewEventHandler for CompositeEventHandler {
    async fn handle_state_change(&self, state: &ViewState) {
        for handler in &self.handlers {
            handler.handle_state_change(state).await;
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.handle_error(error).await;
        }
    }
}
