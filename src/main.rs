// src/main.rs
use anyhow::Result;
use log::info;
use std::sync::Arc;

use whale_checker::{Config, HyperliquidClient, WhaleClassifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (info unless RUST_LOG says otherwise)
    whale_checker::logging::init();

    // Load configuration
    let config = Config::load()?;
    info!("✅ Configuration loaded ({})", config.api.base_url);

    let client = HyperliquidClient::new(&config.api)?;
    let classifier = WhaleClassifier::new(Arc::new(client));

    let check = &config.check;
    let result = classifier
        .is_whale(&check.wallet, &check.token, check.threshold_pct)
        .await;
    println!("Is whale wallet: {}", result);

    Ok(())
}
