use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::error::ConnectError;
use crate::models::{token::TokenRecord, view_state::ViewState};
use crate::traits::{
    event_handler::ViewEventHandler, token_source::TokenSource, wallet_provider::WalletProvider,
};

/// What a single activation ended with
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationOutcome {
    /// Tokens were fetched and now back the table
    Loaded { account: String, token_count: usize },
    /// A newer activation was started meanwhile; this response was dropped
    Superseded,
    /// The activation failed; state was left untouched apart from `busy`
    Failed(String),
}

impl ActivationOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ActivationOutcome::Loaded { .. })
    }
}

/// View state plus the id of the newest activation
#[derive(Debug, Default)]
struct Inner {
    view: ViewState,
    latest_request: u64,
}

/// Connects to a wallet, fetches the account's tokens and keeps them for rendering
pub struct ConnectAndListTokens {
    wallet: Arc<dyn WalletProvider>,
    token_source: Arc<dyn TokenSource>,
    event_handler: Arc<dyn ViewEventHandler>,
    inner: Arc<Mutex<Inner>>,
    // Held from mutation through delivery so handlers see states in order
    dispatch: Arc<Mutex<()>>,
}

impl ConnectAndListTokens {
    /// Create a new component in its mounted state
    pub fn new(
        wallet: Arc<dyn WalletProvider>,
        token_source: Arc<dyn TokenSource>,
        event_handler: Arc<dyn ViewEventHandler>,
    ) -> Self {
        Self {
            wallet,
            token_source,
            event_handler,
            inner: Arc::new(Mutex::new(Inner::default())),
            dispatch: Arc::new(Mutex::new(())),
        }
    }

    /// Copy of the current view state
    pub async fn state(&self) -> ViewState {
        self.inner.lock().await.view.clone()
    }

    pub async fn is_busy(&self) -> bool {
        self.inner.lock().await.view.busy
    }

    /// Run the connect-fetch-store sequence once.
    ///
    /// Never fails: errors are logged, reported to the event handler and
    /// folded into the returned outcome.
    pub async fn activate(&self) -> ActivationOutcome {
        let request_id = self.begin().await;
        debug!("Starting activation #{}", request_id);

        match self.connect_and_fetch().await {
            Ok((account, tokens)) => {
                let token_count = tokens.len();
                let applied = self
                    .settle(request_id, move |state| {
                        state.tokens = tokens;
                        state.last_updated = Some(Utc::now());
                    })
                    .await;

                if !applied {
                    debug!("Discarding stale response for activation #{}", request_id);
                    return ActivationOutcome::Superseded;
                }

                info!("Loaded {} token(s) for {}", token_count, account);
                ActivationOutcome::Loaded { account, token_count }
            }
            Err(e) => {
                error!("Could not fetch coins: {}", e);

                if !self.settle(request_id, |_| {}).await {
                    debug!("Activation #{} failed after being superseded", request_id);
                }

                let err = anyhow::Error::new(e);
                self.event_handler.handle_error(&err).await;
                ActivationOutcome::Failed(err.to_string())
            }
        }
    }

    async fn connect_and_fetch(&self) -> Result<(String, Vec<TokenRecord>), ConnectError> {
        let accounts = self.wallet.request_accounts().await?;
        let account = accounts.into_iter().next().ok_or(ConnectError::NoAccounts)?;
        debug!("Connected account: {}", account);

        let tokens = self.token_source.fetch_tokens(&account).await?;
        Ok((account, tokens))
    }

    /// Register a new activation, mark busy and notify. Returns the activation id.
    async fn begin(&self) -> u64 {
        let _dispatch = self.dispatch.lock().await;
        let (request_id, snapshot) = {
            let mut inner = self.inner.lock().await;
            inner.latest_request += 1;
            inner.view.busy = true;
            (inner.latest_request, inner.view.clone())
        };
        self.event_handler.handle_state_change(&snapshot).await;
        request_id
    }

    /// Apply `mutate` and clear busy, but only if `request_id` is still the
    /// newest activation. Returns whether the state was touched.
    async fn settle<F>(&self, request_id: u64, mutate: F) -> bool
    where
        F: FnOnce(&mut ViewState),
    {
        let _dispatch = self.dispatch.lock().await;
        let snapshot = {
            let mut inner = self.inner.lock().await;
            if inner.latest_request != request_id {
                return false;
            }
            mutate(&mut inner.view);
            inner.view.busy = false;
            inner.view.clone()
        };
        self.event_handler.handle_state_change(&snapshot).await;
        true
    }
}

impl Clone for ConnectAndListTokens {
    fn clone(&self) -> Self {
        Self {
            wallet: self.wallet.clone(),
            token_source: self.token_source.clone(),
            event_handler: self.event_handler.clone(),
            inner: self.inner.clone(),
            dispatch: self.dispatch.clone(),
        }
    }
}
