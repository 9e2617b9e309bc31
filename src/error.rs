use thiserror::Error;

/// Everything that can go wrong during an activation.
///
/// The component treats all variants the same way; they are kept apart only
/// so the log line says what happened.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("no wallet provider is available")]
    WalletUnavailable,
    #[error("wallet rejected the request: {0}")]
    WalletRejected(String),
    #[error("wallet returned no accounts")]
    NoAccounts,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(String),
}
