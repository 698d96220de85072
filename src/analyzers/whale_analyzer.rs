use chrono::Utc;
use log::{error, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::TokenSupplyResolver;
use crate::api::ExchangeInfo;
use crate::error::{Result, WhaleError};
use crate::models::{TokenSupplyInfo, WalletHolding, WhaleReport};
use crate::utils::{calculate_share_percentage, is_valid_wallet_address};

/// Decides whether a wallet holds at least a given share of a token's supply
pub struct WhaleClassifier {
    api: Arc<dyn ExchangeInfo>,
    supply: TokenSupplyResolver,
}

impl WhaleClassifier {
    pub fn new(api: Arc<dyn ExchangeInfo>) -> Self {
        Self {
            supply: TokenSupplyResolver::new(api.clone()),
            api,
        }
    }

    /// The wallet's first balance entry for `symbol`
    pub async fn find_holding(&self, wallet: &str, symbol: &str) -> Result<WalletHolding> {
        let state = self.api.spot_user_state(wallet).await?;

        state
            .balances
            .iter()
            .find(|balance| balance.coin == symbol)
            .map(WalletHolding::from)
            .ok_or_else(|| WhaleError::HoldingNotFound {
                wallet: wallet.to_string(),
                symbol: symbol.to_string(),
            })
    }

    /// Full classification, keeping the reason when it can't be made.
    ///
    /// Supply is resolved before the balance lookup, so an unknown token never
    /// reaches the balance service.
    pub async fn classify(
        &self,
        wallet: &str,
        symbol: &str,
        threshold_pct: f64,
    ) -> Result<WhaleReport> {
        let threshold = validate_inputs(wallet, threshold_pct)?;
        let supply = self.supply.try_resolve_supply(symbol).await?;
        self.measure(wallet, symbol, threshold, &supply).await
    }

    /// Whale or not. Every failure is logged and counts as "not a whale".
    pub async fn is_whale(&self, wallet: &str, symbol: &str, threshold_pct: f64) -> bool {
        let threshold = match validate_inputs(wallet, threshold_pct) {
            Ok(threshold) => threshold,
            Err(e) => {
                error!("Error checking whale status: {}", e);
                return false;
            }
        };

        // logs its own failure, naming the symbol
        let supply = match self.supply.resolve_supply(symbol).await {
            Some(supply) => supply,
            None => {
                warn!("Could not find token information for {}", symbol);
                return false;
            }
        };

        match self.measure(wallet, symbol, threshold, &supply).await {
            Ok(report) => {
                info!("{}", report);
                report.is_whale
            }
            Err(e) if e.is_not_found() => {
                warn!("{}", e);
                false
            }
            Err(e) => {
                error!("Error checking whale status: {}", e);
                false
            }
        }
    }

    /// Compare the wallet's holding against an already-resolved supply
    async fn measure(
        &self,
        wallet: &str,
        symbol: &str,
        threshold: Decimal,
        supply: &TokenSupplyInfo,
    ) -> Result<WhaleReport> {
        info!("🐋 Checking {} holdings of {} (threshold {}%)", symbol, wallet, threshold);

        if supply.total_supply <= Decimal::ZERO {
            return Err(WhaleError::ZeroSupply {
                symbol: symbol.to_string(),
            });
        }

        let holding = self.find_holding(wallet, symbol).await?;
        let percentage = calculate_share_percentage(holding.total_amount, supply.total_supply)
            .ok_or(WhaleError::Overflow)?;

        Ok(WhaleReport {
            wallet: wallet.to_string(),
            symbol: symbol.to_string(),
            holding: holding.total_amount.abs(),
            total_supply: supply.total_supply,
            percentage,
            threshold,
            is_whale: percentage >= threshold,
            checked_at: Utc::now(),
        })
    }
}

/// Threshold as a `Decimal`, once both inputs are known to be usable
fn validate_inputs(wallet: &str, threshold_pct: f64) -> Result<Decimal> {
    let threshold = parse_threshold(threshold_pct)?;
    if !is_valid_wallet_address(wallet) {
        return Err(WhaleError::InvalidAddress(wallet.to_string()));
    }
    Ok(threshold)
}

fn parse_threshold(threshold_pct: f64) -> Result<Decimal> {
    if !threshold_pct.is_finite() || !(0.0..=100.0).contains(&threshold_pct) {
        return Err(WhaleError::InvalidThreshold(threshold_pct));
    }
    Decimal::try_from(threshold_pct).map_err(|_| WhaleError::InvalidThreshold(threshold_pct))
}
