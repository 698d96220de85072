//! Whale detection against Hyperliquid's public info API.
//!
//! A wallet is a whale for a token when its balance is at least a given
//! percentage of the token's total supply.

pub mod analyzers;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use analyzers::{TokenSupplyResolver, WhaleClassifier};
pub use api::{ExchangeInfo, HyperliquidClient};
pub use config::Config;
pub use error::WhaleError;
pub use models::{TokenDescriptor, TokenSupplyInfo, WalletHolding, WhaleReport};
