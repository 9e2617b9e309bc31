use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use coin_lens::{
    utils::format_account, ActivationOutcome, CompositeEventHandler, Config,
    ConnectAndListTokens, ConsoleEventHandler, HtmlRenderer, WalletSource,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(config.log_level)
        .with_file(true)
        .with_line_number(true)
        .init();

    tokio::runtime::Runtime::new()?.block_on(async {
        info!("Coin Lens v{}", coin_lens::VERSION);
        info!("Coins service: {}", config.coins_api_url);
        match &config.wallet {
            WalletSource::JsonRpc(url) => info!("Wallet RPC: {}", url),
            WalletSource::Static(address) => info!("Wallet address: {}", format_account(address)),
            WalletSource::Missing => {
                warn!("No wallet configured. Set WALLET_RPC_URL or WALLET_ADDRESS in .env file.")
            }
        }

        let html = Arc::new(HtmlRenderer::new());
        let mut handlers = CompositeEventHandler::new();
        handlers.add_handler(Arc::new(ConsoleEventHandler::new()));
        handlers.add_handler(html.clone());

        let component = ConnectAndListTokens::new(
            config.build_wallet(),
            config.build_token_source()?,
            Arc::new(handlers),
        );

        match component.activate().await {
            ActivationOutcome::Loaded { account, token_count } => {
                info!("{} token(s) listed for {}", token_count, format_account(&account));
            }
            ActivationOutcome::Superseded => {}
            ActivationOutcome::Failed(reason) => {
                warn!("Activation failed: {}", reason);
            }
        }

        if let Some(path) = &config.html_output {
            tokio::fs::write(path, html.page().await)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("HTML written to {}", path.display());
        }

        Ok(())
    })
}
