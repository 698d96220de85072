// src/models.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{format_number, format_percentage};

/// A token symbol paired with the opaque ID the metadata service keys details by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub symbol: String,
    pub identifier: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSupplyInfo {
    pub total_supply: Decimal,
    pub circulating_supply: Decimal,
    pub max_supply: Option<Decimal>,
}

/// One line of a wallet's spot balance listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletHolding {
    pub coin: String,
    /// Signed; callers take the absolute value
    pub total_amount: Decimal,
    /// Part of the total locked in open orders
    pub hold: Decimal,
}

/// Result of a successful classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhaleReport {
    pub wallet: String,
    pub symbol: String,
    pub holding: Decimal,
    pub total_supply: Decimal,
    pub percentage: Decimal,
    pub threshold: Decimal,
    pub is_whale: bool,
    pub checked_at: DateTime<Utc>,
}

impl fmt::Display for WhaleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_whale { "🐋 whale" } else { "🐟 not a whale" };
        write!(
            f,
            "{} holds {} of {} {} ({} of supply, threshold {}): {}",
            self.wallet,
            format_number(self.holding),
            format_number(self.total_supply),
            self.symbol,
            format_percentage(self.percentage),
            format_percentage(self.threshold),
            verdict,
        )
    }
}
