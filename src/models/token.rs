use std::fmt;

use serde::Deserialize;

/// Balance quantity as delivered by the coins service.
///
/// The service may send either a string or a number; both are kept as-is and
/// displayed verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Balance {
    Text(String),
    Number(f64),
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::Text(s) => f.write_str(s),
            Balance::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Balance {
    fn from(s: &str) -> Self {
        Balance::Text(s.to_string())
    }
}

impl From<f64> for Balance {
    fn from(n: f64) -> Self {
        Balance::Number(n)
    }
}

/// One row of the token table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenRecord {
    pub symbol: String,
    pub name: String,
    pub balance: Balance,
    pub logo: String,
}

impl TokenRecord {
    /// Create a new token record
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        balance: impl Into<Balance>,
        logo: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            balance: balance.into(),
            logo: logo.into(),
        }
    }

    /// Format balance with symbol
    pub fn formatted_balance(&self) -> String {
        format!("{} {}", self.balance, self.symbol)
    }
}

/// Body of `GET /coins/{account}`
#[derive(Debug, Clone, Deserialize)]
pub struct CoinsResponse {
    pub data: Vec<TokenRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_accepts_string_and_number() {
        let body = r#"{"data":[
            {"symbol":"ETH","name":"Ether","balance":"1.5","logo":"eth.png"},
            {"symbol":"USDC","name":"USD Coin","balance":42.25,"logo":"usdc.png"}
        ]}"#;
        let resp: CoinsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].balance, Balance::Text("1.5".to_string()));
        assert_eq!(resp.data[1].balance, Balance::Number(42.25));
        assert_eq!(resp.data[1].balance.to_string(), "42.25");
    }

    #[test]
    fn missing_data_field_is_rejected() {
        let body = r#"{"tokens":[]}"#;
        assert!(serde_json::from_str::<CoinsResponse>(body).is_err());
    }

    #[test]
    fn formatted_balance_appends_symbol() {
        let token = TokenRecord::new("ETH", "Ether", "1.5", "eth.png");
        assert_eq!(token.formatted_balance(), "1.5 ETH");
    }
}
