use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::view_state::{TokenTable, ViewState};
use crate::traits::event_handler::ViewEventHandler;
use crate::utils::helper::truncate_string;

const NAME_WIDTH: usize = 24;
const LOGO_WIDTH: usize = 40;

/// Console logging view handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }

    /// Text lines of the token table, header first
    pub fn table_lines(table: &TokenTable) -> Vec<String> {
        let symbol_width = table
            .rows
            .iter()
            .map(|row| row.symbol.chars().count())
            .chain(std::iter::once(TokenTable::HEADERS[0].len()))
            .max()
            .unwrap_or(0);
        let balance_width = table
            .rows
            .iter()
            .map(|row| row.balance.chars().count())
            .chain(std::iter::once(TokenTable::HEADERS[2].len()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(table.rows.len() + 1);
        lines.push(format!(
            "{:<sw$}  {:<nw$}  {:>bw$}  {}",
            TokenTable::HEADERS[0],
            TokenTable::HEADERS[1],
            TokenTable::HEADERS[2],
            TokenTable::HEADERS[3],
            sw = symbol_width,
            nw = NAME_WIDTH,
            bw = balance_width,
        ));

        for row in &table.rows {
            lines.push(format!(
                "{:<sw$}  {:<nw$}  {:>bw$}  {}",
                row.symbol,
                truncate_string(&row.name, NAME_WIDTH),
                row.balance,
                truncate_string(&row.logo_src, LOGO_WIDTH),
                sw = symbol_width,
                nw = NAME_WIDTH,
                bw = balance_width,
            ));
        }

        lines
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewEventHandler for ConsoleEventHandler {
    async fn handle_state_change(&self, state: &ViewState) {
        let trigger = state.trigger();
        info!(
            "[{}] {}",
            trigger.label,
            if trigger.disabled { "disabled" } else { "enabled" }
        );

        // Busy states keep the previous table on screen; only redraw once settled
        if state.busy {
            return;
        }

        match state.table() {
            Some(table) => {
                info!("{}", "-".repeat(80));
                for line in Self::table_lines(&table) {
                    info!("{}", line);
                }
                info!("{}", "-".repeat(80));
            }
            None => info!("No tokens to display"),
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        warn!("Keeping previous tokens after failed activation: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::level_filters::LevelFilter;

    use super::*;
    use crate::models::token::TokenRecord;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn failure_is_reported_below_error_level() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(LevelFilter::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        ConsoleEventHandler::new()
            .handle_error(&anyhow::anyhow!("unexpected status: 502"))
            .await;

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("unexpected status: 502"));
        assert!(!output.contains("ERROR"));
    }

    #[test]
    fn table_lines_align_columns() {
        let state = ViewState {
            tokens: vec![
                TokenRecord::new("ETH", "Ether", "1.5", "eth.png"),
                TokenRecord::new("USDC", "USD Coin", 1200.0, "usdc.png"),
            ],
            ..ViewState::default()
        };
        let lines = ConsoleEventHandler::table_lines(&state.table().unwrap());

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Symbol  Name"));
        assert!(lines[1].starts_with("ETH     Ether"));
        assert!(lines[1].ends_with("eth.png"));
        assert!(lines[2].contains("1200"));
    }
}
