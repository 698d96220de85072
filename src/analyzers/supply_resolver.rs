use log::{error, info, warn};
use std::sync::Arc;

use crate::api::ExchangeInfo;
use crate::error::{Result, WhaleError};
use crate::models::{TokenDescriptor, TokenSupplyInfo};

/// Turns a token symbol into its supply figures.
///
/// Two round-trips: the token listing (symbol -> tokenId), then the details
/// for that ID. Nothing is cached between calls.
pub struct TokenSupplyResolver {
    api: Arc<dyn ExchangeInfo>,
}

impl TokenSupplyResolver {
    pub fn new(api: Arc<dyn ExchangeInfo>) -> Self {
        Self { api }
    }

    /// First listed token whose name is exactly `symbol`
    pub async fn resolve_descriptor(&self, symbol: &str) -> Result<TokenDescriptor> {
        let meta = self.api.spot_meta().await?;

        meta.tokens
            .iter()
            .find(|token| token.name == symbol)
            .map(TokenDescriptor::from)
            .ok_or_else(|| WhaleError::TokenNotFound {
                symbol: symbol.to_string(),
            })
    }

    pub async fn try_resolve_supply(&self, symbol: &str) -> Result<TokenSupplyInfo> {
        let descriptor = self.resolve_descriptor(symbol).await?;
        info!("🔎 {} resolved to token ID {}", descriptor.symbol, descriptor.identifier);

        let details = self.api.token_details(&descriptor.identifier).await?;
        Ok(details.into())
    }

    /// Supply figures for `symbol`, or `None` after logging why not
    pub async fn resolve_supply(&self, symbol: &str) -> Option<TokenSupplyInfo> {
        match self.try_resolve_supply(symbol).await {
            Ok(supply) => Some(supply),
            Err(e) if e.is_not_found() => {
                warn!("{}", e);
                None
            }
            Err(e) => {
                error!("Error fetching token info for {}: {}", symbol, e);
                None
            }
        }
    }
}
