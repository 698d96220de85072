// src/api/mod.rs
pub mod hyperliquid;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::error::Result;

pub use hyperliquid::{
    HyperliquidClient, SpotBalance, SpotMeta, SpotToken, SpotUserState, TokenDetails,
};

/// The read-only slice of the exchange's `/info` API the checker needs.
///
/// `HyperliquidClient` talks to the real thing; tests swap in an in-memory one.
#[async_trait]
pub trait ExchangeInfo: Send + Sync {
    /// Every spot token the exchange knows about
    async fn spot_meta(&self) -> Result<SpotMeta>;

    /// Supply figures for one token, keyed by its `tokenId`
    async fn token_details(&self, token_id: &str) -> Result<TokenDetails>;

    /// Spot balances held by `user`
    async fn spot_user_state(&self, user: &str) -> Result<SpotUserState>;
}
