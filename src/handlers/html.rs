use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::view_state::{TokenTable, ViewState};
use crate::traits::event_handler::ViewEventHandler;
use crate::utils::helper::escape_html;

/// Render the component as an HTML fragment.
///
/// The button carries `disabled` exactly when the state is busy; the table is
/// emitted only when there are tokens.
pub fn render_html(state: &ViewState) -> String {
    let trigger = state.trigger();
    let mut html = String::from("<div>\n");

    html.push_str(&format!(
        "  <button type=\"button\"{}>{}</button>\n",
        if trigger.disabled { " disabled" } else { "" },
        escape_html(trigger.label)
    ));

    if let Some(table) = state.table() {
        html.push_str("  <table>\n    <thead>\n      <tr>");
        for header in TokenTable::HEADERS {
            html.push_str(&format!("<th>{}</th>", header));
        }
        html.push_str("</tr>\n    </thead>\n    <tbody>\n");

        for row in &table.rows {
            html.push_str(&format!(
                "      <tr data-key=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td><img src=\"{}\" alt=\"{}\"></td></tr>\n",
                escape_html(&row.key),
                escape_html(&row.symbol),
                escape_html(&row.name),
                escape_html(&row.balance),
                escape_html(&row.logo_src),
                escape_html(&row.symbol),
            ));
        }

        html.push_str("    </tbody>\n  </table>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Wrap a fragment into a standalone page
pub fn render_page(state: &ViewState) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Tokens</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        render_html(state)
    )
}

/// Keeps the markup of the latest state
pub struct HtmlRenderer {
    markup: RwLock<String>,
    page: RwLock<String>,
}

impl HtmlRenderer {
    /// Create a renderer showing the initial state
    pub fn new() -> Self {
        let initial = ViewState::new();
        Self {
            markup: RwLock::new(render_html(&initial)),
            page: RwLock::new(render_page(&initial)),
        }
    }

    /// Latest rendered fragment
    pub async fn markup(&self) -> String {
        self.markup.read().await.clone()
    }

    /// Latest rendered standalone page
    pub async fn page(&self) -> String {
        self.page.read().await.clone()
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewEventHandler for HtmlRenderer {
    async fn handle_state_change(&self, state: &ViewState) {
        *self.markup.write().await = render_html(state);
        *self.page.write().await = render_page(state);
        debug!("Re-rendered HTML ({} token rows)", state.token_count());
    }

    async fn handle_error(&self, _error: &anyhow::Error) {
        // Nothing is shown to the user; the control re-enables via the state change.
    }
}
