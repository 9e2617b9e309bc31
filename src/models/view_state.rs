use chrono::{DateTime, Utc};

use super::token::TokenRecord;

/// Label shown on the trigger control
pub const CONNECT_LABEL: &str = "Connect with Metamask";

/// Local state of the connect-and-list component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// True only while an activation is in flight
    pub busy: bool,
    /// Replaced wholesale on each successful fetch
    pub tokens: Vec<TokenRecord>,
    /// When `tokens` was last replaced
    pub last_updated: Option<DateTime<Utc>>,
}

impl ViewState {
    /// Fresh state as created at mount
    pub fn new() -> Self {
        Self::default()
    }

    /// The trigger control derived from this state
    pub fn trigger(&self) -> TriggerControl {
        TriggerControl {
            label: CONNECT_LABEL,
            disabled: self.busy,
        }
    }

    /// The token table, present only when there is at least one token
    pub fn table(&self) -> Option<TokenTable> {
        if self.tokens.is_empty() {
            return None;
        }

        let rows = self
            .tokens
            .iter()
            .map(|token| TokenRow {
                key: token.symbol.clone(),
                symbol: token.symbol.clone(),
                name: token.name.clone(),
                balance: token.balance.to_string(),
                logo_src: token.logo.clone(),
            })
            .collect();

        Some(TokenTable { rows })
    }

    /// Number of tokens held
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// The single button of the component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    pub label: &'static str,
    pub disabled: bool,
}

/// Rendered table of token rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    pub rows: Vec<TokenRow>,
}

impl TokenTable {
    pub const HEADERS: [&'static str; 4] = ["Symbol", "Name", "Balance", "Logo"];
}

/// One table row; `logo_src` is used as an image source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub key: String,
    pub symbol: String,
    pub name: String,
    pub balance: String,
    pub logo_src: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_enabled_trigger_and_no_table() {
        let state = ViewState::new();
        assert!(!state.trigger().disabled);
        assert!(state.table().is_none());
    }

    #[test]
    fn busy_state_disables_trigger() {
        let state = ViewState { busy: true, ..ViewState::default() };
        assert!(state.trigger().disabled);
    }

    #[test]
    fn table_rows_follow_token_order() {
        let state = ViewState {
            tokens: vec![
                TokenRecord::new("ETH", "Ether", "1.5", "eth.png"),
                TokenRecord::new("DAI", "Dai", 3.0, "dai.png"),
            ],
            ..ViewState::default()
        };

        let table = state.table().unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].key, "ETH");
        assert_eq!(table.rows[0].logo_src, "eth.png");
        assert_eq!(table.rows[1].symbol, "DAI");
        assert_eq!(table.rows[1].balance, "3");
    }
}
